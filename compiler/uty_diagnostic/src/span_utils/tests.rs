use super::*;

#[test]
fn test_line_from_offset_single_line() {
    let source = "hello world";
    assert_eq!(line_from_offset(source, 0), 1);
    assert_eq!(line_from_offset(source, 10), 1);
}

#[test]
fn test_line_from_offset_multiple_lines() {
    let source = "line1\nline2\nline3";
    assert_eq!(line_from_offset(source, 0), 1); // 'l' of line1
    assert_eq!(line_from_offset(source, 5), 1); // '\n' after line1
    assert_eq!(line_from_offset(source, 6), 2); // 'l' of line2
    assert_eq!(line_from_offset(source, 12), 3); // 'l' of line3
}

#[test]
fn test_line_from_offset_past_end() {
    assert_eq!(line_from_offset("a\nb", 100), 2);
}

#[test]
fn test_line_number_from_span() {
    let source = "line1\nline2\nline3";
    assert_eq!(line_number(source, Span::new(0, 5)), 1);
    assert_eq!(line_number(source, Span::new(6, 11)), 2);
}

#[test]
fn test_table_matches_linear_scan() {
    let source = "abc\n\ndefgh\nij\n";
    let table = LineOffsetTable::build(source);
    for offset in 0..=u32::try_from(source.len()).unwrap_or(0) {
        assert_eq!(
            table.line_from_offset(offset),
            line_from_offset(source, offset),
            "offset {offset}"
        );
    }
    assert_eq!(table.line_count(), 5);
}

#[test]
fn test_offset_to_line_col_unicode() {
    let source = "αβγ\nδε";
    let table = LineOffsetTable::build(source);
    // Greek letters are 2 bytes each
    assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
    assert_eq!(table.offset_to_line_col(source, 4), (1, 3));
    assert_eq!(table.offset_to_line_col(source, 7), (2, 1));
}

#[test]
fn test_empty_source() {
    let table = LineOffsetTable::build("");
    assert_eq!(table.offset_to_line_col("", 0), (1, 1));
    assert_eq!(table.line_count(), 1);
}
