use treedom::{Document, NodeKind};

// ============================================================================
// Intrinsic Width
// ============================================================================

#[test]
fn test_text_width_counts_columns() {
    let mut doc = Document::new();
    let root = doc.root();
    let ascii = doc.create(NodeKind::text("gain"));
    let wide = doc.create(NodeKind::text("日本語"));
    let empty = doc.create(NodeKind::text(""));
    doc.append_child(root, ascii).unwrap();
    doc.append_child(root, wide).unwrap();
    doc.append_child(root, empty).unwrap();

    assert_eq!(doc.rendered_width(ascii), 4);
    // CJK characters occupy two columns each
    assert_eq!(doc.rendered_width(wide), 6);
    assert_eq!(doc.rendered_width(empty), 0);
}

#[test]
fn test_box_width_is_its_widest_child() {
    let mut doc = Document::new();
    let root = doc.root();
    let b = doc.create(NodeKind::Box);
    let short = doc.create(NodeKind::text("abc"));
    let long = doc.create(NodeKind::text("abcdefg"));
    doc.append_child(root, b).unwrap();
    doc.append_child(b, short).unwrap();
    doc.append_child(b, long).unwrap();

    assert_eq!(doc.rendered_width(b), 7);
}

#[test]
fn test_empty_box_measures_zero_even_when_visible() {
    let mut doc = Document::new();
    let root = doc.root();
    let b = doc.create(NodeKind::Box);
    doc.append_child(root, b).unwrap();

    assert!(doc.is_visible(b));
    assert_eq!(doc.rendered_width(b), 0);
}

// ============================================================================
// Disclosures
// ============================================================================

#[test]
fn test_closed_disclosure_shows_header_and_hides_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let d = doc.create(NodeKind::disclosure("Radio"));
    let child = doc.create(NodeKind::text("a very long configuration row"));
    doc.append_child(root, d).unwrap();
    doc.append_child(d, child).unwrap();

    // Indicator, space, then the summary text
    assert_eq!(doc.rendered_width(d), 7);
    assert!(!doc.is_visible(child));
    assert_eq!(doc.rendered_width(child), 0);
}

#[test]
fn test_open_disclosure_reveals_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let d = doc.create(NodeKind::disclosure("Radio"));
    let child = doc.create(NodeKind::text("a very long configuration row"));
    doc.append_child(root, d).unwrap();
    doc.append_child(d, child).unwrap();

    doc.set_open(d, true);

    assert!(doc.is_visible(child));
    assert_eq!(doc.rendered_width(child), 29);
    // The open disclosure is as wide as its widest row
    assert_eq!(doc.rendered_width(d), 29);
}

#[test]
fn test_nested_closed_disclosures_hide_everything_below() {
    let mut doc = Document::new();
    let root = doc.root();
    let outer = doc.create(NodeKind::disclosure("Outer"));
    let inner = doc.create(NodeKind::disclosure("Inner"));
    let leaf = doc.create(NodeKind::text("leaf"));
    doc.append_child(root, outer).unwrap();
    doc.append_child(outer, inner).unwrap();
    doc.append_child(inner, leaf).unwrap();

    assert_eq!(doc.rendered_width(outer), 7);
    assert_eq!(doc.rendered_width(inner), 0);
    assert_eq!(doc.rendered_width(leaf), 0);

    // Opening only the outer one exposes the inner header, not the leaf
    doc.set_open(outer, true);
    assert_eq!(doc.rendered_width(inner), 7);
    assert_eq!(doc.rendered_width(leaf), 0);
}

// ============================================================================
// Modals & Hidden
// ============================================================================

#[test]
fn test_closed_modal_renders_nothing() {
    let mut doc = Document::new();
    let root = doc.root();
    let m = doc.create(NodeKind::modal());
    let content = doc.create(NodeKind::text("dialog body"));
    doc.append_child(root, m).unwrap();
    doc.append_child(m, content).unwrap();

    assert!(!doc.is_visible(m));
    assert_eq!(doc.rendered_width(m), 0);
    assert!(!doc.is_visible(content));
    assert_eq!(doc.rendered_width(content), 0);
}

#[test]
fn test_shown_modal_renders_its_children() {
    let mut doc = Document::new();
    let root = doc.root();
    let m = doc.create(NodeKind::modal());
    let content = doc.create(NodeKind::text("dialog body"));
    doc.append_child(root, m).unwrap();
    doc.append_child(m, content).unwrap();

    doc.show_modal(m);

    assert!(doc.is_visible(m));
    assert_eq!(doc.rendered_width(m), 11);
    assert!(doc.is_visible(content));
}

#[test]
fn test_hidden_flag_suppresses_the_subtree() {
    let mut doc = Document::new();
    let root = doc.root();
    let b = doc.create(NodeKind::Box);
    let t = doc.create(NodeKind::text("content"));
    doc.append_child(root, b).unwrap();
    doc.append_child(b, t).unwrap();

    doc.set_hidden(b, true);

    assert!(!doc.is_visible(b));
    assert_eq!(doc.rendered_width(b), 0);
    assert!(!doc.is_visible(t));
    assert_eq!(doc.rendered_width(t), 0);
}

// ============================================================================
// Detached Nodes
// ============================================================================

#[test]
fn test_detached_nodes_measure_zero() {
    let mut doc = Document::new();
    let t = doc.create(NodeKind::text("floating"));

    assert!(!doc.is_visible(t));
    assert_eq!(doc.rendered_width(t), 0);

    // Attaching it makes the same node measurable
    let root = doc.root();
    doc.append_child(root, t).unwrap();
    assert_eq!(doc.rendered_width(t), 8);
}
