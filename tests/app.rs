use std::io::Cursor;

use serde_json::json;

use rental_price::{AppErr, Config, Console};

const ROUND: &str = "Harvester\nModel A\nBrand X\nExcellent\nDaily\nDiesel\nUrban\nHigh\nShort-term\nBasic\nLow\n3\n80\n8\n7\n1.0\n";

/// Two stumps over age (column 3) and horsepower (column 7).
fn model_json() -> String {
    let stump = |feature: u32, threshold: f32, left: f32, right: f32| {
        json!({
            "left_children": [1, -1, -1],
            "right_children": [2, -1, -1],
            "split_indices": [feature, 0, 0],
            "split_conditions": [threshold, left, right],
            "default_left": [1, 0, 0],
            "split_type": [0, 0, 0]
        })
    };

    json!({
        "learner": {
            "gradient_booster": {
                "name": "gbtree",
                "model": {
                    "trees": [stump(3, 10.0, 1500.0, 900.0), stump(7, 100.0, -250.0, 250.0)]
                }
            },
            "learner_model_param": { "base_score": "5E-1", "num_feature": "16" },
            "objective": { "name": "reg:squarederror" }
        },
        "version": [2, 0, 3]
    })
    .to_string()
}

fn run(config: &Config, input: &str) -> (Result<usize, AppErr>, String) {
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let res = rental_price::run(config, &mut console);
    (res, String::from_utf8(console.into_output()).unwrap())
}

#[test]
fn missing_model_reports_and_never_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        model_path: dir.path().join("xgb_model.json"),
    };

    let (res, output) = run(&config, ROUND);
    let err = res.unwrap_err();

    assert!(matches!(err, AppErr::ModelMissing(_)));
    assert_eq!(
        err.report(),
        format!(
            "Error: Model file '{}' not found!",
            config.model_path.display()
        )
    );
    assert!(output.is_empty());
}

#[test]
fn unreadable_model_is_a_generic_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xgb_model.json");
    std::fs::write(&path, "{\"learner\": 1}").unwrap();

    let (res, output) = run(&Config { model_path: path }, ROUND);
    let err = res.unwrap_err();

    assert!(matches!(err, AppErr::ModelLoad(_)));
    assert!(err.report().starts_with("An error occurred: failed to load model"));
    assert!(output.is_empty());
}

#[test]
fn predicts_with_a_model_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("xgb_model.json");
    std::fs::write(&path, model_json()).unwrap();

    let (res, output) = run(&Config { model_path: path }, &format!("{ROUND}yes\n{ROUND}no\n"));

    assert_eq!(res.unwrap(), 2);
    assert_eq!(
        output
            .matches("\nPredicted Rental Price: Rupees1250.50 per day\n")
            .count(),
        2
    );
}
