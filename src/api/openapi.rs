use utoipa::OpenApi;

use crate::logic::{
    plant_list::{BedSheet, PlantListEntry, PrintablePlan},
    spacing::SpacingPreview,
};
use crate::models::{
    plant::{Plant, PlantCategory, SunRequirement},
    request::{
        AutoPlaceRequest, AutoPlaceResponse, BedPayload, BedView, ClearRequest, ClickOutcomeKind,
        ClickRequest, ClickResponse, ErrorResponse, GridCell, Pagination, PlacementDto,
        PlantResponse, PreviewRequest, PrintRequest,
    },
    Coordinate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Garden Layout API",
        description = "Garden bed planner: browse plants by hardiness zone, place them on a 3-inch grid under spacing rules, auto-arrange a bed and print its plant list.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::plants::list_plants,
        crate::api::handlers::plants::get_plant,
        crate::api::handlers::beds::post_click,
        crate::api::handlers::beds::post_preview,
        crate::api::handlers::beds::post_auto_place,
        crate::api::handlers::beds::post_clear,
        crate::api::handlers::plan::post_print,
    ),
    components(
        schemas(
            // Enums
            SunRequirement, PlantCategory, ClickOutcomeKind,
            // Plants
            Plant, PlantResponse,
            // Beds
            Coordinate, PlacementDto, BedPayload, GridCell, BedView,
            // Requests
            ClickRequest, PreviewRequest, AutoPlaceRequest, ClearRequest, PrintRequest,
            // Responses
            ClickResponse, SpacingPreview, AutoPlaceResponse,
            PlantListEntry, BedSheet, PrintablePlan,
            // Shared
            Pagination, ErrorResponse,
        )
    ),
    tags(
        (name = "plants", description = "Plant catalogue — list by zone, detail"),
        (name = "beds",   description = "Bed layout — click, hover preview, auto-arrange, clear"),
        (name = "plan",   description = "Printable plant lists"),
    )
)]
pub struct ApiDoc;
