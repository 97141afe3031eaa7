use crate::model::ThroughputResult;
use crate::rlc::Direction;
use std::fmt::Write;

/// Render one row per UE with UL/DL rates in kb/s, two decimals.
///
/// A direction with no records prints as 0.00, same as a zero-span group.
pub fn render_table(result: &ThroughputResult) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{:<10} {:<15} {:<15}",
        "UE ID", "UL Throughput kb/s", "DL Throughput kb/s"
    )?;
    writeln!(out, "{}", "-".repeat(40))?;

    for (ue_id, ue) in &result.ues {
        writeln!(
            out,
            "{:<10} {:<15.2} {:<15.2}",
            ue_id,
            ue.kbps(Direction::Ul),
            ue.kbps(Direction::Dl)
        )?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_throughput;
    use crate::rlc::LogRecord;
    use pretty_assertions::assert_eq;

    fn rec(direction: Direction, ue_id: u64, size: u64, time: f64) -> LogRecord {
        LogRecord {
            direction,
            ue_id,
            size,
            time,
        }
    }

    #[test]
    fn renders_rows_in_ue_order() {
        let result = build_throughput(&[
            rec(Direction::Dl, 7, 100, 0.0),
            rec(Direction::Ul, 3, 50, 1.2),
            rec(Direction::Dl, 7, 200, 0.5),
        ]);

        let expected = "\
UE ID      UL Throughput kb/s DL Throughput kb/s
----------------------------------------
3          0.00            0.00           
7          0.00            4.80           
";
        assert_eq!(render_table(&result).unwrap(), expected);
    }

    #[test]
    fn empty_result_has_header_only() {
        let table = render_table(&ThroughputResult::default()).unwrap();
        assert_eq!(table.lines().count(), 2);
    }
}
