//! Integration tests for Wirebox
//!
//! End-to-end tests that replay edit scripts against a canvas.
//!
mod common;
use common::*;
use std::fs;
use wirebox::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    fn final_outputs(canvas: &Canvas) -> Vec<Option<Value>> {
        canvas.store().boxes().iter().map(|b| b.output()).collect()
    }

    #[test]
    fn test_text_script_replay() {
        let script = EditScript::from_lines(SCRIPT_TEXT).expect("Script should parse");
        assert_eq!(script.len(), 8);

        let mut canvas = Canvas::new();
        let outcomes = script.replay(&mut canvas);

        assert_eq!(outcomes[0], MutationOutcome::Created(BoxId(1)));
        assert_eq!(outcomes.iter().filter(|o| o.is_ignored()).count(), 1);
        assert!(outcomes[7].is_ignored());

        assert_eq!(
            final_outputs(&canvas),
            vec![
                Some(Value::Bool(true)),
                Some(Value::Number(1.0)),
                Some(Value::Bool(false)),
            ]
        );
        assert_eq!(canvas.store().connections().len(), 3);
        assert!(canvas.store().is_consistent());
    }

    #[test]
    fn test_json_script_matches_text_script() {
        let json = EditScript::from_json(SCRIPT_JSON).expect("Script should parse");
        let text = EditScript::from_lines(SCRIPT_TEXT).unwrap();

        let mut from_json = Canvas::new();
        json.replay(&mut from_json);
        let mut from_text = Canvas::new();
        text.replay(&mut from_text);

        assert_eq!(from_json.snapshot(), from_text.snapshot());
    }

    #[test]
    fn test_bare_command_array_is_accepted() {
        let script = EditScript::from_json(
            r#"[{"op": "createBox", "kind": "logical", "operator": "NOT"}]"#,
        )
        .unwrap();

        let mut canvas = Canvas::new();
        script.replay(&mut canvas);
        assert_eq!(canvas.output(BoxId(1)), Some(Value::Bool(true)));
    }

    #[test]
    fn test_command_display_parses_back() {
        let script = EditScript::from_json(SCRIPT_JSON).unwrap();
        let text: String = script
            .commands
            .iter()
            .map(|c| format!("{}\n", c))
            .collect();

        assert_eq!(EditScript::from_lines(&text).unwrap(), script);
    }

    #[test]
    fn test_script_files_by_extension() {
        let dir = std::env::temp_dir();
        let json_path = dir.join(format!("wirebox-script-{}.json", std::process::id()));
        let text_path = dir.join(format!("wirebox-script-{}.wire", std::process::id()));
        fs::write(&json_path, SCRIPT_JSON).unwrap();
        fs::write(&text_path, SCRIPT_TEXT).unwrap();

        let json = EditScript::from_file(&json_path);
        let text = EditScript::from_file(&text_path);
        fs::remove_file(&json_path).ok();
        fs::remove_file(&text_path).ok();

        assert_eq!(json.unwrap().len(), 7);
        assert_eq!(text.unwrap().len(), 8);
        assert!(matches!(
            EditScript::from_file(dir.join("wirebox-missing-script.json")),
            Err(ScriptError::Io { .. })
        ));
    }

    #[test]
    fn test_invalid_script_reports_line() {
        let err = EditScript::from_lines("box logical AND\nbox shape CIRCLE\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid command on line 2: unknown box kind 'shape'"
        );
    }

    #[test]
    fn test_dashboard_expression() {
        // (Level > ?) AND NOT(Speed < ?) with tags and empty inputs both
        // reading as defaults, so every comparison sees zeros.
        let mut canvas = traced_canvas();
        let level = canvas.palette().find_tag("Level").unwrap();
        let speed = canvas.palette().find_tag("Speed").unwrap();

        let logical = |name: &str, x: f64, y: f64| {
            (OperationKind::Logical, name.to_string(), Position::new(x, y))
        };
        let boxes = [
            logical("GreaterThan", 0.0, 0.0),
            logical("LessThan", 0.0, 100.0),
            logical("NOT", 150.0, 100.0),
            logical("AND", 300.0, 50.0),
        ];
        let ids: Vec<BoxId> = boxes
            .into_iter()
            .map(|(kind, name, position)| canvas.create_box(kind, &name, position))
            .collect();
        let (above, slow, not_slow, alarm) = (ids[0], ids[1], ids[2], ids[3]);

        canvas.connect_tag_input(above, 0, &level.name, &level.external_id);
        canvas.connect_tag_input(slow, 0, &speed.name, &speed.external_id);
        canvas.connect_box_output(slow, not_slow, 0);
        canvas.connect_box_output(above, alarm, 0);
        canvas.connect_box_output(not_slow, alarm, 1);

        assert_eq!(canvas.output(above), Some(Value::Bool(false)));
        assert_eq!(canvas.output(slow), Some(Value::Bool(false)));
        assert_eq!(canvas.output(not_slow), Some(Value::Bool(true)));
        assert_eq!(canvas.output(alarm), Some(Value::Bool(false)));

        let explanation = TraceFormatter::format_trace(&canvas.last_trace()[3]);
        assert_eq!(
            explanation,
            "#4 = #1 (was false) AND #3 (was true) => false"
        );
    }

    #[test]
    fn test_snapshot_json_for_drawing_layer() {
        let mut canvas = Canvas::new();
        EditScript::from_json(SCRIPT_JSON)
            .unwrap()
            .replay(&mut canvas);

        let json: serde_json::Value =
            serde_json::from_str(&canvas.snapshot().to_json().unwrap()).unwrap();

        assert_eq!(json["boxes"].as_array().unwrap().len(), 3);
        assert_eq!(json["boxes"][0]["operatorName"], "NOT");
        assert_eq!(json["boxes"][0]["output"], true);
        assert_eq!(json["boxes"][1]["inputs"][0]["sourceType"], "box");
        assert_eq!(json["boxes"][1]["inputs"][0]["sourceId"], 1);
        assert_eq!(json["boxes"][1]["inputs"][1]["sourceType"], "tag");
        assert_eq!(json["connections"][0]["toInputIndex"], 0);
    }

    #[test]
    fn test_snapshot_json_keeps_infinite_outputs() {
        let mut canvas = Canvas::new();
        let divide = canvas.create_box(OperationKind::Arithmetic, "DIVIDE", Position::default());
        assert_eq!(canvas.output(divide), Some(Value::Number(f64::INFINITY)));

        let json: serde_json::Value =
            serde_json::from_str(&canvas.snapshot().to_json().unwrap()).unwrap();

        assert_ne!(json["boxes"][0]["output"], serde_json::Value::Null);
        assert_eq!(json["boxes"][0]["output"], "Infinity");
    }
}
