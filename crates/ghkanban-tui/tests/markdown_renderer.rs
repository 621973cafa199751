use ghkanban_tui::markdown_renderer::render_markdown;
use ratatui::style::Modifier;
use ratatui::text::Line;

fn plain(line: &Line) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

fn texts(markdown: &str) -> Vec<String> {
    render_markdown(markdown).iter().map(plain).collect()
}

#[test]
fn test_detail_header_lines() {
    let lines = texts("Fix the parser\nhttps://github.com/o/r/issues/1\n\nBody text");
    assert_eq!(
        lines,
        vec![
            "Fix the parser",
            "https://github.com/o/r/issues/1",
            "",
            "Body text",
        ]
    );
}

#[test]
fn test_bold_and_italic_spans() {
    let lines = render_markdown("This is **bold** and *italic*");
    let spans = &lines[0].spans;
    let bold = spans.iter().find(|s| s.content == "bold").unwrap();
    let italic = spans.iter().find(|s| s.content == "italic").unwrap();
    assert!(bold.style.add_modifier.contains(Modifier::BOLD));
    assert!(italic.style.add_modifier.contains(Modifier::ITALIC));
}

#[test]
fn test_code_block_lines_are_indented() {
    let lines = texts("```rust\nfn main() {}\nlet x = 1;\n```");
    assert_eq!(lines, vec!["[rust]", "  fn main() {}", "  let x = 1;"]);
}

#[test]
fn test_multiple_paragraphs() {
    let lines = texts("First paragraph\n\nSecond paragraph");
    assert_eq!(lines, vec!["First paragraph", "", "Second paragraph"]);
}

#[test]
fn test_inline_code_keeps_text() {
    let lines = texts("Use `cargo run` to start");
    assert_eq!(lines, vec!["Use cargo run to start"]);
}

#[test]
fn test_empty_text() {
    assert!(render_markdown("").is_empty());
}

#[test]
fn test_lists_get_bullets_and_numbers() {
    assert_eq!(texts("- one\n- two"), vec!["• one", "• two"]);
    assert_eq!(texts("3. three\n4. four"), vec!["3. three", "4. four"]);
}

#[test]
fn test_loose_list_keeps_bullet_on_item_line() {
    assert_eq!(texts("- one\n\n- two"), vec!["• one", "• two"]);
}

#[test]
fn test_task_list_markers() {
    assert_eq!(
        texts("- [x] done\n- [ ] todo"),
        vec!["• [x] done", "• [ ] todo"]
    );
}

#[test]
fn test_link_shows_target() {
    let lines = texts("See [docs](https://example.com)");
    assert_eq!(lines, vec!["See docs <https://example.com>"]);
}

#[test]
fn test_heading_is_emphasized() {
    let lines = render_markdown("## Steps\n\ntext");
    assert_eq!(plain(&lines[0]), "Steps");
    assert!(lines[0].spans[0]
        .style
        .add_modifier
        .contains(Modifier::UNDERLINED));
    assert_eq!(plain(&lines[2]), "text");
}

#[test]
fn test_block_quote_prefix() {
    assert_eq!(texts("> quoted"), vec!["│ quoted"]);
}
