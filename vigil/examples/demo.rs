use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use treedom::{Document, NodeId, NodeKind, NoticeHub};
use vigil::{reveal, Condition, LifecycleState, REVEAL};

fn main() -> anyhow::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut doc = Document::new();
    let mut hub = NoticeHub::new();
    let mut life = LifecycleState::new();

    let window = doc.create(NodeKind::Box);
    doc.append_child(doc.root(), window)?;

    let gain = settings_section(&mut doc, window)?;
    let (tabs, hidden_panel, tab_body) = tab_strip(&mut doc, window)?;
    let modal_body = status_modal(&mut doc, window)?;

    // The tab strip is a custom container: the built-in walk cannot unhide
    // its panels, so it watches for reveal notices rising through it.
    hub.observe(tabs, move |doc, notice| {
        if notice.name == REVEAL {
            println!("tab strip expanding for {}", notice.origin);
            doc.set_hidden(hidden_panel, false);
        }
    });

    life.add_listener(window, Condition::Init, move || {
        println!("window is live");
        Ok(())
    });
    life.add_listener(window, Condition::Destroy, move || {
        println!("window torn down");
        Ok(())
    });
    life.add_listener(gain, Condition::Destroy, move || {
        println!("gain row torn down");
        Ok(())
    });

    init_tree(&mut life, &doc, doc.root());

    println!("gain row width before reveal: {}", doc.rendered_width(gain));
    println!("reveal gain row: {}", reveal(&mut doc, &mut hub, gain));
    println!("gain row width after reveal: {}", doc.rendered_width(gain));

    println!("reveal tab body: {}", reveal(&mut doc, &mut hub, tab_body));
    println!("reveal modal body: {}", reveal(&mut doc, &mut hub, modal_body));

    // Tear the window down for good, reclaim the side tables while the ids
    // are still enumerable, then dispose of the subtree
    life.destroy(&doc, window);
    println!("window liveness: {:?}", life.liveness(window));
    life.forget_subtree(&doc, window);
    hub.forget_subtree(&doc, window);
    doc.remove(window)?;

    Ok(())
}

/// Nested disclosures, both collapsed, hiding a single configuration row.
fn settings_section(doc: &mut Document, parent: NodeId) -> anyhow::Result<NodeId> {
    let section = doc.create(NodeKind::disclosure("Receiver settings"));
    let advanced = doc.create(NodeKind::disclosure("Advanced"));
    let gain = doc.create(NodeKind::text("Gain: 20 dB"));
    doc.append_child(parent, section)?;
    doc.append_child(section, advanced)?;
    doc.append_child(advanced, gain)?;
    Ok(gain)
}

/// Two panels under one strip; the second starts hidden.
fn tab_strip(doc: &mut Document, parent: NodeId) -> anyhow::Result<(NodeId, NodeId, NodeId)> {
    let tabs = doc.create(NodeKind::Box);
    let first = doc.create(NodeKind::text("first tab"));
    let second = doc.create(NodeKind::Box);
    let body = doc.create(NodeKind::text("second tab body"));
    doc.append_child(parent, tabs)?;
    doc.append_child(tabs, first)?;
    doc.append_child(tabs, second)?;
    doc.append_child(second, body)?;
    doc.set_hidden(second, true);
    Ok((tabs, second, body))
}

/// A closed modal holding a status line.
fn status_modal(doc: &mut Document, parent: NodeId) -> anyhow::Result<NodeId> {
    let modal = doc.create(NodeKind::modal());
    let status = doc.create(NodeKind::text("Connection lost"));
    doc.append_child(parent, modal)?;
    doc.append_child(modal, status)?;
    Ok(status)
}

/// Hosts decide when subtrees go live; this one marks everything at once.
fn init_tree(life: &mut LifecycleState, doc: &Document, node: NodeId) {
    life.init(doc, node);
    for &child in doc.children(node) {
        init_tree(life, doc, child);
    }
}
