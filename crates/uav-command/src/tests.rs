//! Unit tests for uav-command.

use std::io::Cursor;

use crate::{
    Command, CommandError, CommandKind, CommandQueue, Direction, load_commands_csv,
    load_commands_csv_reader, load_commands_json_reader,
};

// ── Command ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod command {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(Command::takeoff("a").kind, CommandKind::Takeoff);
        assert_eq!(Command::land("a").kind, CommandKind::Land);
        let m = Command::move_by("a", 1, -2);
        assert_eq!(m.kind, CommandKind::Move);
        assert_eq!(m.direction, Some(Direction::new(1, -2)));
    }

    #[test]
    fn move_without_direction_fails_validation() {
        let cmd = Command::new("a", CommandKind::Move, None);
        match cmd.validate() {
            Err(CommandError::MissingDirection { agent }) => assert_eq!(agent, "a"),
            other => panic!("expected MissingDirection, got {other:?}"),
        }
        assert!(Command::takeoff("a").validate().is_ok());
        assert!(Command::move_by("a", 0, 1).validate().is_ok());
    }

    #[test]
    fn kind_from_str_is_case_insensitive() {
        assert_eq!("takeoff".parse::<CommandKind>().unwrap(), CommandKind::Takeoff);
        assert_eq!(" Land ".parse::<CommandKind>().unwrap(), CommandKind::Land);
        assert_eq!("HOVER".parse::<CommandKind>().unwrap(), CommandKind::Unrecognized);
    }

    #[test]
    fn display() {
        assert_eq!(Command::move_by("a", 1, 0).to_string(), "a:MOVE(1, 0)");
        assert_eq!(Command::land("b").to_string(), "b:LAND");
    }
}

// ── CommandQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn index_is_step() {
        let mut q = CommandQueue::new();
        assert!(q.is_empty());
        q.push(Command::takeoff("a"));
        q.push(Command::move_by("a", 1, 0));
        assert_eq!(q.len(), 2);
        assert_eq!(q.get(0).unwrap().kind, CommandKind::Takeoff);
        assert_eq!(q.get(1).unwrap().kind, CommandKind::Move);
        assert!(q.get(2).is_none());
    }

    #[test]
    fn iterates_in_order() {
        let mut q = CommandQueue::new();
        q.push(Command::takeoff("a"));
        q.push(Command::land("a"));
        let kinds: Vec<CommandKind> = q.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![CommandKind::Takeoff, CommandKind::Land]);
        assert_eq!((&q).into_iter().count(), 2);
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod json_loader {
    use super::*;

    #[test]
    fn parses_canonical_shape() {
        let json = r#"[
            { "agentId": "A", "kind": "TAKEOFF" },
            { "agentId": "B", "kind": "TAKEOFF" },
            { "agentId": "A", "kind": "MOVE", "direction": { "dx": 1, "dz": 0 } }
        ]"#;
        let cmds = load_commands_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(cmds.len(), 3);
        assert_eq!(cmds[2], Command::move_by("A", 1, 0));
    }

    #[test]
    fn parses_legacy_field_names() {
        let json = r#"[
            { "UAVId": "A", "command": "MOVE", "data": { "direction": { "x": 0, "y": -1 } } }
        ]"#;
        let cmds = load_commands_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(cmds[0], Command::move_by("A", 0, -1));
    }

    #[test]
    fn unknown_kind_loads_as_unrecognized() {
        let json = r#"[ { "agentId": "A", "kind": "HOVER" } ]"#;
        let cmds = load_commands_json_reader(Cursor::new(json)).unwrap();
        assert_eq!(cmds[0].kind, CommandKind::Unrecognized);
    }

    #[test]
    fn move_without_direction_still_loads() {
        let json = r#"[ { "agentId": "A", "kind": "MOVE" } ]"#;
        let cmds = load_commands_json_reader(Cursor::new(json)).unwrap();
        assert!(cmds[0].direction.is_none());
        assert!(cmds[0].validate().is_err());
    }

    #[test]
    fn missing_agent_is_parse_error() {
        let json = r#"[ { "kind": "LAND" } ]"#;
        assert!(matches!(
            load_commands_json_reader(Cursor::new(json)),
            Err(CommandError::Parse(_))
        ));
    }

    #[test]
    fn serialises_canonical_shape() {
        let json = serde_json::to_string(&Command::move_by("A", 2, 3)).unwrap();
        assert_eq!(json, r#"{"agentId":"A","kind":"MOVE","direction":{"dx":2,"dz":3}}"#);
        let json = serde_json::to_string(&Command::land("A")).unwrap();
        assert_eq!(json, r#"{"agentId":"A","kind":"LAND"}"#);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use std::io::Write;

    use super::*;

    const CSV: &str = "\
agent_id,kind,dx,dz
alpha,TAKEOFF,,
bravo,takeoff,,
alpha,MOVE,1,0
alpha,LAND,,
";

    #[test]
    fn parses_rows_in_order() {
        let cmds = load_commands_csv_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(
            cmds,
            vec![
                Command::takeoff("alpha"),
                Command::takeoff("bravo"),
                Command::move_by("alpha", 1, 0),
                Command::land("alpha"),
            ]
        );
    }

    #[test]
    fn half_direction_rejected() {
        let csv = "agent_id,kind,dx,dz\nalpha,MOVE,1,\n";
        let err = load_commands_csv_reader(Cursor::new(csv)).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn bad_integer_is_parse_error() {
        let csv = "agent_id,kind,dx,dz\nalpha,MOVE,east,0\n";
        assert!(matches!(
            load_commands_csv_reader(Cursor::new(csv)),
            Err(CommandError::Parse(_))
        ));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let cmds = load_commands_csv(file.path()).unwrap();
        assert_eq!(cmds.len(), 4);
    }
}
