/// Column alignment for [`render_grid`].
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Right,
}

/// Renders rows as an ASCII grid with a header row.
///
/// Column widths fit the widest cell; the header row is separated from the
/// data rows by a `=` rule, data rows from each other by a `-` rule.
///
/// # Arguments
///
/// * `headers` - One label per column.
/// * `aligns` - One alignment per column.
/// * `rows` - Data rows; each must have one cell per column.
///
/// # Returns
///
/// The rendered grid, terminated by a newline.
pub fn render_grid(headers: &[&str], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);

    let header_cells: Vec<String> = headers.iter().map(|header| header.to_string()).collect();

    let mut grid = String::new();
    grid.push_str(&rule_line(&widths, '-'));
    grid.push_str(&data_line(&header_cells, aligns, &widths));
    grid.push_str(&rule_line(&widths, '='));
    for row in rows {
        grid.push_str(&data_line(row, aligns, &widths));
        grid.push_str(&rule_line(&widths, '-'));
    }

    grid
}

/// Truncates a display name to at most `max_chars` characters.
pub fn truncate_name(name: &str, max_chars: usize) -> String {
    name.chars().take(max_chars).collect()
}

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.chars().count()).collect();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    widths
}

fn rule_line(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line.push('\n');
    line
}

fn data_line(cells: &[String], aligns: &[Align], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for ((cell, align), &width) in cells.iter().zip(aligns).zip(widths) {
        match align {
            Align::Left => line.push_str(&format!(" {cell:<width$} |")),
            Align::Right => line.push_str(&format!(" {cell:>width$} |")),
        }
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_long_names_to_the_limit() {
        assert_eq!(truncate_name("a_very_long_username_indeed", 20).len(), 20);
        assert_eq!(truncate_name("short", 20), "short");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let name: String = "ñ".repeat(25);

        assert_eq!(truncate_name(&name, 20).chars().count(), 20);
    }

    #[test]
    fn grid_fits_the_widest_cell_and_separates_the_header() {
        let rows = vec![
            vec!["1".to_owned(), "alice".to_owned()],
            vec!["2".to_owned(), "bob".to_owned()],
        ];

        let grid = render_grid(
            &["Rank", "Username"],
            &[Align::Right, Align::Left],
            &rows,
        );

        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "+------+----------+");
        assert_eq!(lines[1], "| Rank | Username |");
        assert_eq!(lines[2], "+======+==========+");
        assert_eq!(lines[3], "|    1 | alice    |");
        assert_eq!(lines[4], "+------+----------+");
        assert_eq!(lines[5], "|    2 | bob      |");
    }

    #[test]
    fn empty_row_set_renders_the_header_alone() {
        let grid = render_grid(&["Rank"], &[Align::Right], &[]);

        assert_eq!(grid.lines().count(), 3);
    }
}
