use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::region::list_regions,
        api::region::list_region_teachers,
        api::teacher::list_teachers,
        api::teacher::create_teacher,
        api::teacher::get_teacher,
        api::teacher::update_teacher,
        api::teacher::delete_teacher,
    ),
    components(schemas(api::teacher::TeacherForm)),
    tags(
        (name = "school-registry", description = "Teacher registry API")
    )
)]
pub struct ApiDoc;
