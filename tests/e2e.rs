mod common;

use common::synthetic_scene::{scene, HEIGHT, WIDTH};
use std::f32::consts::FRAC_PI_2;
use table_fit::dataset::{evaluate, read_images, DatasetReport};
use table_fit::detection::{HsvSegmenter, RegionSegmenter};
use table_fit::geometry::Line;
use table_fit::image::BinaryMask;
use table_fit::{BoundingGeometryExtractor, FitParams, Placement, TableFitDetector, Verdict};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn segmented_bowl_gives_its_bounding_box() {
    init_logging();
    let img = scene(200, (250, 260, 400, 380));
    let mask = HsvSegmenter::default().segment(&img);
    let geom = BoundingGeometryExtractor::new().extract(&mask).expect("bowl found");
    assert!((geom.bbox.center.x - 324.5).abs() < 1.5, "{:?}", geom.bbox);
    assert!((geom.bbox.center.y - 319.5).abs() < 1.5, "{:?}", geom.bbox);
    assert!((geom.extremes.topmost.y - 260.0).abs() <= 1.0);
    assert!((geom.extremes.bottommost.y - 379.0).abs() <= 1.0);
}

#[test]
fn bowl_on_the_floor_fits() {
    init_logging();
    let report = TableFitDetector::default()
        .process(&scene(200, (250, 260, 400, 380)))
        .expect("decided");
    assert!((report.table_edge.left.y - 200.0).abs() < 3.0, "{:?}", report.table_edge);
    assert_eq!(report.placement, Placement::Below);
    assert_eq!(report.verdict, Verdict::Fits);
}

#[test]
fn bowl_on_the_table_does_not_fit() {
    init_logging();
    let report = TableFitDetector::default()
        .process(&scene(350, (250, 150, 400, 290)))
        .expect("decided");
    assert_eq!(report.placement, Placement::Above);
    assert_eq!(report.verdict, Verdict::DoesNotFit);
}

#[test]
fn straddling_bowl_is_decided_by_area() {
    init_logging();
    let mostly_above = TableFitDetector::default()
        .process(&scene(330, (250, 200, 400, 350)))
        .expect("decided");
    assert_eq!(mostly_above.placement, Placement::Straddling);
    assert_eq!(mostly_above.verdict, Verdict::DoesNotFit);

    let mostly_below = TableFitDetector::default()
        .process(&scene(220, (250, 200, 400, 350)))
        .expect("decided");
    assert_eq!(mostly_below.placement, Placement::Straddling);
    assert_eq!(mostly_below.verdict, Verdict::Fits);
    let clipped = mostly_below.clipped_area.expect("straddling");
    assert!(clipped < 0.25 * mostly_below.box_area);
}

#[test]
fn floor_line_is_not_taken_for_the_table_edge() {
    init_logging();
    let w = WIDTH as f32;
    let horizontal = |y: f32| Line::from_polar(-FRAC_PI_2, -y, w).expect("horizontal");
    let floor = horizontal(900.0);
    let table = horizontal(300.0);
    let shelf = horizontal(100.0);
    let mask = BinaryMask::from_fn(WIDTH as usize, HEIGHT as usize, |x, y| {
        (250..350).contains(&x) && (320..420).contains(&y)
    });
    let report = TableFitDetector::default()
        .process_parts(vec![shelf, floor, table], WIDTH, 1000, &mask)
        .expect("decided");
    assert_eq!(report.table_edge, table);
    assert_eq!(report.edge_selection.after_isolation, 2);
    assert_eq!(report.verdict, Verdict::Fits);
}

#[test]
fn dataset_folder_is_evaluated_in_name_order() {
    init_logging();
    let dir = tempfile::tempdir().expect("tempdir");
    scene(350, (250, 150, 400, 290))
        .save(dir.path().join("01_on_table.png"))
        .expect("save");
    scene(200, (250, 260, 400, 380))
        .save(dir.path().join("02_on_floor.png"))
        .expect("save");
    image::RgbImage::from_pixel(WIDTH, HEIGHT, common::synthetic_scene::FLOOR)
        .save(dir.path().join("03_empty.png"))
        .expect("save");

    let images = read_images(dir.path()).expect("dataset");
    let detector = TableFitDetector::new(FitParams::default());
    let outcomes = evaluate(&detector, &images);
    let names: Vec<&str> = outcomes.iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, vec!["01_on_table.png", "02_on_floor.png", "03_empty.png"]);
    assert_eq!(outcomes[0].verdict(), Some(Verdict::DoesNotFit));
    assert_eq!(outcomes[1].verdict(), Some(Verdict::Fits));
    assert!(outcomes[2].result.is_err());
    assert_eq!(outcomes[0].answer_line(), "Bowl cannot be placed under the table");
    assert_eq!(outcomes[1].answer_line(), "Bowl can be placed under the table");

    let report = DatasetReport::new("mixed".into(), dir.path().to_path_buf(), Some(true), outcomes);
    assert_eq!(report.total, 3);
    assert_eq!(report.correct, Some(1));
    let json = serde_json::to_value(&report).expect("json");
    assert_eq!(json["images"][1]["verdict"], "fits");
    assert!(json["images"][2]["error"].is_string());
}
