use std::env;
use std::path::Path;
use table_fit::config::load_config;
use table_fit::dataset::{evaluate, read_images, DatasetReport};
use table_fit::image::io::write_json_file;
use table_fit::TableFitDetector;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;
    let detector = TableFitDetector::new(config.params.clone());

    let mut reports = Vec::with_capacity(config.datasets.len());
    for (i, dataset) in config.datasets.iter().enumerate() {
        let label = dataset.display_label();
        let images = read_images(&dataset.path)?;
        let outcomes = evaluate(&detector, &images);

        if i > 0 {
            println!();
        }
        println!("Checking dataset with '{label}' answer:");
        for outcome in &outcomes {
            println!("{}", outcome.answer_line());
        }

        let report = DatasetReport::new(label, dataset.path.clone(), dataset.expected, outcomes);
        if let Some(correct) = report.correct {
            println!("Correct: {correct}/{}", report.total);
        }
        reports.push(report);
    }

    if let Some(path) = &config.output.json_out {
        write_json_file(path, &reports)?;
        println!("Saved report to {}", path.display());
    }
    Ok(())
}

fn usage() -> String {
    "Usage: table_fit <config.json>".to_string()
}
