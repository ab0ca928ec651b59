//! Fixed-width table rendering for parsed schedule expressions.

use cronex_expr::CronExpression;

/// Width each output label is padded to before the value column starts.
pub const PADDING_LENGTH: usize = 14;

/// Renders the six output lines: five labeled field expansions followed by
/// the command, each label end-padded to [`PADDING_LENGTH`] characters.
pub fn render_table(expr: &CronExpression) -> String {
    let mut lines = Vec::with_capacity(6);
    for (field, values) in expr.schedules() {
        lines.push(format!(
            "{:<width$}{}",
            field.label(),
            join_values(values),
            width = PADDING_LENGTH
        ));
    }
    lines.push(format!(
        "{:<width$}{}",
        "command",
        expr.command,
        width = PADDING_LENGTH
    ));
    lines.join("\n")
}

/// Renders an expanded value sequence as a comma-joined list.
fn join_values(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_table_pads_labels_to_14_chars() {
        let expr = CronExpression::parse("*/15 0 1,15 * 1-5 /usr/bin/backup").unwrap();
        let table = render_table(&expr);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "minute        0,15,30,45");
        assert_eq!(lines[1], "hour          0");
        assert_eq!(lines[2], "day of month  1,15");
        assert_eq!(lines[3], "month         1,2,3,4,5,6,7,8,9,10,11,12");
        assert_eq!(lines[4], "day of week   1,2,3,4,5");
        assert_eq!(lines[5], "command       /usr/bin/backup");
    }

    #[test]
    fn test_each_label_column_is_exactly_14_chars() {
        let expr = CronExpression::parse("0 0 1 1 1 cmd").unwrap();
        let labels = ["minute", "hour", "day of month", "month", "day of week", "command"];
        for (line, label) in render_table(&expr).lines().zip(labels) {
            assert_eq!(&line[..PADDING_LENGTH], format!("{label:<14}"));
        }
    }

    #[test]
    fn test_single_values_render_without_separator() {
        let expr = CronExpression::parse("5 12 31 12 7 reboot").unwrap();
        let table = render_table(&expr);
        assert!(table.contains("minute        5"));
        assert!(table.contains("day of month  31"));
        assert!(table.contains("command       reboot"));
    }
}
