//! Command line access to the layout data file.
use layout_store::{LayoutPatch, LayoutStore};
use std::env;
use std::fs;
use std::path::PathBuf;

const USAGE: &str = "Usage: layout-store <data-file> <command>
Commands:
  list [user-id]
  show <layout-id>
  create <layout-json-file>
  update <layout-id> <layout-json-file>
  delete <layout-id>";

#[derive(Debug, PartialEq)]
enum Command {
    List { user_id: Option<String> },
    Show { id: String },
    Create { body: PathBuf },
    Update { id: String, body: PathBuf },
    Delete { id: String },
}

fn parse_args(args: &[String]) -> Option<(PathBuf, Command)> {
    let data_file = PathBuf::from(args.get(1)?);
    let rest: Vec<&str> = args.iter().skip(3).map(String::as_str).collect();

    let command = match (args.get(2)?.as_str(), rest.as_slice()) {
        ("list", []) => Command::List { user_id: None },
        ("list", [user]) => Command::List {
            user_id: Some(user.to_string()),
        },
        ("show", [id]) => Command::Show { id: id.to_string() },
        ("create", [body]) => Command::Create {
            body: PathBuf::from(body),
        },
        ("update", [id, body]) => Command::Update {
            id: id.to_string(),
            body: PathBuf::from(body),
        },
        ("delete", [id]) => Command::Delete { id: id.to_string() },
        _ => return None,
    };

    Some((data_file, command))
}

fn read_patch(path: &PathBuf) -> Result<LayoutPatch, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let Some((data_file, command)) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let store = LayoutStore::new(data_file);

    match command {
        Command::List { user_id } => {
            let layouts = store.list_layouts(user_id.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&layouts)?);
        }
        Command::Show { id } => {
            let layout = store.get_layout(&id)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Create { body } => {
            let layout = store.create_layout(read_patch(&body)?)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Update { id, body } => {
            let layout = store.update_layout(&id, read_patch(&body)?)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Delete { id } => {
            store.delete_layout(&id)?;
            println!("{}", serde_json::json!({ "message": "deleted", "id": id }));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<String> {
        std::iter::once("layout-store")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_list_with_and_without_user() {
        let (file, cmd) = parse_args(&args(&["data.json", "list"])).unwrap();
        assert_eq!(file, PathBuf::from("data.json"));
        assert_eq!(cmd, Command::List { user_id: None });

        let (_, cmd) = parse_args(&args(&["data.json", "list", "user456"])).unwrap();
        assert_eq!(
            cmd,
            Command::List {
                user_id: Some("user456".to_string())
            }
        );
    }

    #[test]
    fn parses_update() {
        let (_, cmd) = parse_args(&args(&["data.json", "update", "layout1", "body.json"])).unwrap();
        assert_eq!(
            cmd,
            Command::Update {
                id: "layout1".to_string(),
                body: PathBuf::from("body.json"),
            }
        );
    }

    #[test]
    fn rejects_bad_arity_and_unknown_commands() {
        assert!(parse_args(&args(&[])).is_none());
        assert!(parse_args(&args(&["data.json"])).is_none());
        assert!(parse_args(&args(&["data.json", "show"])).is_none());
        assert!(parse_args(&args(&["data.json", "rename", "a"])).is_none());
    }
}
