use super::*;

fn style(size: f64, line_height: f64, align: TextAlign) -> TextStyle {
    TextStyle {
        font_size: size,
        line_height,
        text_align: align,
        ..TextStyle::default()
    }
}

#[test]
fn two_centered_lines_straddle_the_middle() {
    let s = style(100.0, 1.0, TextAlign::Center);
    let block = layout_text("A\nB", Size::new(800.0, 600.0), Some(&s));
    assert_eq!(block.x, 400.0);
    assert_eq!(block.anchor, TextAnchor::Middle);
    let ys: Vec<f64> = block.lines.iter().map(|l| l.y).collect();
    assert_eq!(ys, [250.0, 350.0]);
    assert_eq!(block.lines[0].text, "A");
    assert_eq!(block.lines[1].text, "B");

    let markup = block.to_markup();
    assert!(markup.contains(r#"<text x="400" y="250""#), "{markup}");
    assert!(markup.contains(r#"<text x="400" y="350""#), "{markup}");
    assert!(markup.contains(r#"text-anchor="middle""#));
}

#[test]
fn single_line_baseline_sits_at_half_height() {
    for (h, size, lh) in [(600.0, 72.0, 1.2), (333.0, 17.0, 2.5), (10.0, 40.0, 1.0)] {
        let s = style(size, lh, TextAlign::Center);
        let block = layout_text("X", Size::new(100.0, h), Some(&s));
        let expected = (h - size * lh) / 2.0 + (size * lh) / 2.0;
        assert_eq!(block.lines[0].y, expected);
        assert!((block.lines[0].y - h / 2.0).abs() < 1e-9);
    }
}

#[test]
fn alignment_selects_anchor_and_inset() {
    let dims = Size::new(500.0, 100.0);
    let left = layout_text("x", dims, Some(&style(10.0, 1.0, TextAlign::Left)));
    assert_eq!((left.x, left.anchor), (10.0, TextAnchor::Start));
    let right = layout_text("x", dims, Some(&style(10.0, 1.0, TextAlign::Right)));
    assert_eq!((right.x, right.anchor), (490.0, TextAnchor::End));
}

#[test]
fn missing_style_uses_defaults() {
    let block = layout_text("hi", Size::new(200.0, 200.0), None);
    assert_eq!(block.style, TextStyle::default());
    assert!((block.line_height_px() - 86.4).abs() < 1e-9);
    assert!(block.to_markup().contains(r#"font-family="Arial, sans-serif""#));
}

#[test]
fn empty_content_is_one_empty_line() {
    let block = layout_text("", Size::new(100.0, 100.0), None);
    assert_eq!(block.lines.len(), 1);
    assert_eq!(block.lines[0].text, "");
}

#[test]
fn markup_escapes_all_five_metacharacters() {
    let markup = render_text(
        r#"<b> & "q" 'a'"#,
        Size::new(300.0, 100.0),
        Some(&style(20.0, 1.0, TextAlign::Center)),
    );
    assert!(markup.contains("&lt;b&gt; &amp; &quot;q&quot; &#39;a&#39;"));

    let start = markup.find("fill=\"black\">").unwrap() + "fill=\"black\">".len();
    let end = markup[start..].find("</text>").unwrap() + start;
    let body = &markup[start..end];
    let stripped = body
        .replace("&amp;", "")
        .replace("&lt;", "")
        .replace("&gt;", "")
        .replace("&quot;", "")
        .replace("&#39;", "");
    assert!(!stripped.contains(['<', '>', '&', '"', '\'']), "{body}");
}

#[test]
fn font_family_with_quotes_stays_inside_attribute() {
    let s = TextStyle {
        font_family: "'Times New Roman', serif".to_string(),
        ..TextStyle::default()
    };
    let markup = render_text("x", Size::new(100.0, 100.0), Some(&s));
    assert!(markup.contains(r#"font-family="&#39;Times New Roman&#39;, serif""#));
}

#[test]
fn escape_borrows_clean_input() {
    assert!(matches!(escape_markup("plain"), Cow::Borrowed("plain")));
}

#[test]
fn markup_is_a_standalone_svg_document() {
    let markup = render_text("A", Size::new(800.0, 600.0), None);
    assert!(markup.starts_with(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="800" height="600" viewBox="0 0 800 600">"#
    ));
    assert!(markup.ends_with("</svg>"));
}
