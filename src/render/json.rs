use crate::model::ThroughputResult;

/// Render the full result, including per-direction record counts and spans.
pub fn render_json(result: &ThroughputResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_throughput;
    use crate::rlc::{Direction, LogRecord};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn absent_direction_is_null() {
        let result = build_throughput(&[
            LogRecord {
                direction: Direction::Dl,
                ue_id: 7,
                size: 100,
                time: 0.0,
            },
            LogRecord {
                direction: Direction::Dl,
                ue_id: 7,
                size: 200,
                time: 0.5,
            },
        ]);
        let value: serde_json::Value = serde_json::from_str(&render_json(&result).unwrap()).unwrap();

        assert_eq!(value["ues"]["7"]["UL"], serde_json::Value::Null);
        assert_eq!(value["ues"]["7"]["DL"]["records"], json!(2));
        assert_eq!(value["ues"]["7"]["DL"]["bytes"], json!(300));
        assert_eq!(value["ues"]["7"]["DL"]["span_s"], json!(0.5));
    }
}
