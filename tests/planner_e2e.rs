use actix_web::{test, web, App};
use chrono::NaiveDate;
use garden_layout::{
    api::routes::configure,
    data::plants::get_all_plants,
    logic::{geometry::spacing_radius, manual::ClickOutcome, session::PlannerSession},
    models::Coordinate,
};

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

fn collect_placements(plants: &serde_json::Value) -> Vec<(String, u64, u64)> {
    plants
        .as_array()
        .unwrap_or(&vec![])
        .iter()
        .map(|p| {
            (
                p["plantId"].as_str().unwrap_or_default().to_string(),
                p["x"].as_u64().unwrap_or_default(),
                p["y"].as_u64().unwrap_or_default(),
            )
        })
        .collect()
}

fn main_garden_request() -> serde_json::Value {
    serde_json::json!({
        "bed": { "id": "1", "name": "Main Garden", "widthFt": 8, "heightFt": 4, "plants": [] },
        "zone": 5,
        "plantIds": ["tomato", "lettuce", "carrot"]
    })
}

// ---------------------------------------------------------------------------
// Scenario 1: 8'×4' bed with tomato, lettuce and carrot
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_main_garden_auto_arrange() {
    let app = test::init_service(build_app()).await;
    let req = test::TestRequest::post()
        .uri("/api/beds/auto-place")
        .set_json(main_garden_request())
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["payload"]["bed"]["cellsX"], 32, "8 ft → 32 cells");
    assert_eq!(body["payload"]["bed"]["cellsY"], 16, "4 ft → 16 cells");

    let placed = collect_placements(&body["payload"]["placed"]);
    let expected: Vec<(String, u64, u64)> = [
        ("lettuce", 2, 2),
        ("lettuce", 6, 2),
        ("lettuce", 10, 2),
        ("carrot", 13, 1),
        ("carrot", 15, 1),
        ("carrot", 17, 1),
    ]
    .iter()
    .map(|(id, x, y)| (id.to_string(), *x, *y))
    .collect();
    assert_eq!(placed, expected);

    // A radius-8 tomato has no scan row in a 16-row bed.
    assert!(placed.iter().all(|(id, _, _)| id != "tomato"));
    assert_eq!(body["payload"]["plantList"][0]["plantId"], "lettuce");
    assert_eq!(body["payload"]["plantList"][0]["count"], 3);
}

// ---------------------------------------------------------------------------
// Scenario 2: repeated runs give the same layout
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_auto_arrange_is_reproducible() {
    let app = test::init_service(build_app()).await;
    let mut runs = Vec::new();
    for _ in 0..2 {
        let payload = serde_json::json!({
            "bed": { "id": "2", "name": "Big", "widthFt": 12, "heightFt": 10 },
            "zone": 6
        });
        let req = test::TestRequest::post()
            .uri("/api/beds/auto-place")
            .set_json(&payload)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        runs.push(collect_placements(&body["payload"]["bed"]["plants"]));
    }
    assert!(!runs[0].is_empty());
    assert_eq!(runs[0], runs[1]);

    let tomatoes = runs[0].iter().filter(|(id, _, _)| id == "tomato").count();
    assert!(tomatoes <= 3, "At most 3 tomatoes, got {tomatoes}");
}

// ---------------------------------------------------------------------------
// Scenario 3: manual placements are discarded by auto-arrange, then printed
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_manual_then_auto_then_print() {
    let app = test::init_service(build_app()).await;

    let click = serde_json::json!({
        "bed": { "id": "1", "name": "Main Garden", "widthFt": 8, "heightFt": 4 },
        "selectedPlantId": "pepper",
        "x": 20,
        "y": 8
    });
    let req = test::TestRequest::post()
        .uri("/api/beds/click")
        .set_json(&click)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["payload"]["outcome"], "placed");
    let manual_bed = serde_json::json!({
        "id": "1",
        "name": "Main Garden",
        "widthFt": 8,
        "heightFt": 4,
        "plants": body["payload"]["bed"]["plants"].clone()
    });

    let arrange = serde_json::json!({
        "bed": manual_bed,
        "zone": 5,
        "plantIds": ["carrot"]
    });
    let req = test::TestRequest::post()
        .uri("/api/beds/auto-place")
        .set_json(&arrange)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let arranged = body["payload"]["bed"]["plants"].clone();
    let placed = collect_placements(&arranged);
    assert_eq!(placed.len(), 3);
    assert!(placed.iter().all(|(id, _, _)| id == "carrot"), "Pepper must be replaced");

    let print = serde_json::json!({
        "beds": [
            { "id": "1", "name": "Main Garden", "widthFt": 8, "heightFt": 4, "plants": arranged },
            { "id": "2", "name": "Empty", "widthFt": 2, "heightFt": 2 }
        ]
    });
    let req = test::TestRequest::post()
        .uri("/api/plan/print")
        .set_json(&print)
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let sheets = body["payload"]["beds"].as_array().unwrap();
    assert_eq!(sheets.len(), 2);
    assert_eq!(sheets[0]["plants"][0]["plantId"], "carrot");
    assert_eq!(sheets[0]["plants"][0]["count"], 3);
    assert_eq!(sheets[0]["plants"][0]["directSow"], "April-July");
    assert!(sheets[1]["plants"].as_array().unwrap().is_empty());
    assert!(body["payload"]["generatedOn"].is_string());
}

// ---------------------------------------------------------------------------
// Scenario 4: a full planning session without HTTP
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_planning_session() {
    let mut session = PlannerSession::new(get_all_plants()).unwrap();
    session.set_zone(6).unwrap();

    session.add_bed("Raised Bed", 20, 20).unwrap();
    let placed = session.auto_arrange().unwrap();
    assert_eq!(session.placement_log().len(), placed);

    let bed = session.active_bed();
    let tomatoes: Vec<Coordinate> = bed
        .plants()
        .iter()
        .filter(|p| p.plant.id == "tomato")
        .map(|p| p.position())
        .collect();
    assert_eq!(
        tomatoes,
        vec![Coordinate::new(8, 8), Coordinate::new(18, 8), Coordinate::new(28, 8)]
    );
    assert_eq!(spacing_radius(bed.plants()[0].plant.spacing_in), 8);

    // Remove the first tomato, then try to squeeze a pepper too close to the second.
    assert!(matches!(
        session.click(Coordinate::new(8, 8)).unwrap(),
        ClickOutcome::Removed(_)
    ));
    session.select_plant("pepper").unwrap();
    assert_eq!(
        session.click(Coordinate::new(18, 12)).unwrap(),
        ClickOutcome::Rejected
    );

    let date = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();
    let plan = session.printable_plan(date);
    assert_eq!(plan.beds.len(), 2);
    let tomato_entry = plan.beds[1]
        .plants
        .iter()
        .find(|e| e.plant_id == "tomato")
        .unwrap();
    assert_eq!(tomato_entry.count, 2);

    session.clear_layout();
    assert!(session.active_bed().plants().is_empty());
    assert_eq!(session.active_bed().name(), "Raised Bed");
}
