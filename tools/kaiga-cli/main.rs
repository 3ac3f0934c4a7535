use clap::Parser;
use kaiga::prelude::*;
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Interactive driver for the kaiga workflow graph core
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start from an empty canvas instead of the seeded demo graph
    #[arg(short, long)]
    empty: bool,

    /// Print snapshots as JSON instead of a readable listing
    #[arg(short, long)]
    json: bool,
}

/// Prints toast-style outcome lines, standing in for the notification
/// collaborator.
struct ToastObserver;

impl GraphObserver for ToastObserver {
    fn connection_created(&self, edge: &Edge) {
        match &edge.source_handle {
            Some(handle) => println!(
                "[toast] Connection created: {} -({})-> {}",
                edge.source, handle, edge.target
            ),
            None => println!(
                "[toast] Connection created: {} -> {}",
                edge.source, edge.target
            ),
        }
    }

    fn duplicate_connection(&self, edge: &Edge) {
        println!(
            "[toast] Warning: duplicate connection {} -> {} (kept anyway)",
            edge.source, edge.target
        );
    }

    fn node_updated(&self, node_id: &str) {
        println!("[toast] Node updated: configuration of '{}' saved", node_id);
    }

    fn node_deleted(&self, node_id: &str, removed_edges: usize) {
        println!(
            "[toast] Node deleted: '{}' and {} connection(s) removed",
            node_id, removed_edges
        );
    }
}

fn main() {
    let cli = Cli::parse();

    let editor = if cli.empty {
        WorkflowEditor::new()
    } else {
        WorkflowEditor::seeded()
    };
    let mut editor = editor.with_observer(Box::new(ToastObserver));

    println!("kaiga workflow editor (type 'help' for commands)");
    print_snapshot(&editor, cli.json);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let parts: Vec<&str> = line.trim().splitn(2, ' ').collect();
        let (command, rest) = (parts.first().copied().unwrap_or(""), parts.get(1).copied());

        match command {
            "" => {}
            "help" => print_help(),
            "add" => cmd_add(&mut editor, rest),
            "select" => cmd_select(&mut editor, rest),
            "connect" => cmd_connect(&mut editor, rest),
            "label" => cmd_label(&mut editor, rest),
            "desc" => cmd_desc(&mut editor, rest),
            "save" => match editor.save_session() {
                Ok(()) => {}
                Err(e) => println!("Error: {}", e),
            },
            "del" => editor.key_pressed(Key::Delete),
            "esc" => editor.key_pressed(Key::Escape),
            "show" => print_snapshot(&editor, cli.json),
            "quit" | "exit" => break,
            other => println!("Unknown command '{}'. Type 'help'.", other),
        }
    }
}

fn cmd_add(editor: &mut WorkflowEditor, rest: Option<&str>) {
    let Some(role_name) = rest else {
        println!("Usage: add trigger|action|condition");
        return;
    };
    match NodeRole::from_str(role_name.trim()) {
        Ok(role) => {
            // Spawn somewhere visible on the canvas.
            let mut rng = rand::rng();
            let position = Position::new(
                rng.random_range(100.0..400.0),
                rng.random_range(100.0..400.0),
            );
            let id = editor.add_node(role, position);
            println!("Added {} node '{}'", role, id);
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn cmd_select(editor: &mut WorkflowEditor, rest: Option<&str>) {
    let Some(id) = rest else {
        println!("Usage: select <node-id>");
        return;
    };
    match editor.node_clicked(id.trim()) {
        Ok(()) => {
            if let Some(session) = editor.session() {
                println!(
                    "Selected '{}' (label: '{}')",
                    session.node_id(),
                    session.label()
                );
            }
        }
        Err(e) => println!("Error: {}", e),
    }
}

fn cmd_connect(editor: &mut WorkflowEditor, rest: Option<&str>) {
    let args: Vec<&str> = rest.unwrap_or("").split_whitespace().collect();
    let (source, target, handle) = match args.as_slice() {
        [source, target] => (*source, *target, None),
        [source, target, handle] => (*source, *target, Some(*handle)),
        _ => {
            println!("Usage: connect <source-id> <target-id> [handle]");
            return;
        }
    };
    let mut connection = Connection::new(source, target);
    if let Some(handle) = handle {
        connection = connection.with_handle(handle);
    }
    if let Err(e) = editor.connection_drawn(connection) {
        println!("Error: {}", e);
    }
}

fn cmd_label(editor: &mut WorkflowEditor, rest: Option<&str>) {
    match (editor.session_mut(), rest) {
        (Some(session), Some(text)) => session.set_label(text.trim()),
        (None, _) => println!("No node selected"),
        (_, None) => println!("Usage: label <text>"),
    }
}

fn cmd_desc(editor: &mut WorkflowEditor, rest: Option<&str>) {
    match (editor.session_mut(), rest) {
        (Some(session), Some(text)) => session.set_description(text.trim()),
        (None, _) => println!("No node selected"),
        (_, None) => println!("Usage: desc <text>"),
    }
}

fn print_snapshot(editor: &WorkflowEditor, json: bool) {
    let snapshot = editor.snapshot();
    if json {
        println!("{}", snapshot.to_json());
        return;
    }
    println!(
        "{} node(s), {} edge(s):",
        snapshot.nodes.len(),
        snapshot.edges.len()
    );
    for node in snapshot.nodes {
        let marker = if editor.selection().is_selected(&node.id) {
            "*"
        } else {
            " "
        };
        println!(
            " {}[{}] {} '{}' at ({:.0}, {:.0})",
            marker, node.id, node.role, node.data.label, node.position.x, node.position.y
        );
    }
    for edge in snapshot.edges {
        match &edge.source_handle {
            Some(handle) => println!(
                "  [{}] {} -({})-> {}",
                edge.id, edge.source, handle, edge.target
            ),
            None => println!("  [{}] {} -> {}", edge.id, edge.source, edge.target),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add trigger|action|condition   add a node with a default label");
    println!("  select <id>                    select a node and open its config draft");
    println!("  connect <src> <dst> [handle]   draw a connection (handle: true/false)");
    println!("  label <text>                   edit the draft label");
    println!("  desc <text>                    edit the draft description");
    println!("  save                           commit the draft");
    println!("  del                            delete the selected node");
    println!("  esc                            dismiss the selection");
    println!("  show                           print the current graph");
    println!("  quit                           exit");
}
