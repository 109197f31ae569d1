use animal_tables::render::html::render_page;
use animal_tables::render::{RowCommand, render_text};
use animal_tables::{RecordingInteraction, SeedSet, Session};

fn session() -> Session {
    let mut ui = RecordingInteraction::default();
    Session::seeded(&SeedSet::builtin(), &mut ui).unwrap()
}

#[test]
fn test_every_row_has_edit_and_delete_for_its_table() {
    for view in session().render_all() {
        for row in &view.rows {
            let commands: Vec<RowCommand> = row.actions.iter().map(|a| a.command).collect();
            assert_eq!(commands, vec![RowCommand::Edit, RowCommand::Delete]);
            assert!(row.actions.iter().all(|a| a.table == view.id && a.name == row.name));
        }
    }
}

#[test]
fn test_page_contains_every_table() {
    let page = render_page(&session().render_all(), &[]);

    for id in ["big-cats", "dogs", "big-fish"] {
        assert!(page.contains(&format!("<tbody id=\"{}-tbody\">", id)));
        assert!(page.contains(&format!("id=\"add-animal-{}\"", id)));
        assert!(page.contains(&format!("id=\"sort-by-name-{}\"", id)));
    }
    assert!(page.contains("<td class=\"big-fish-name\">Humpback Whale</td>"));
    assert!(page.contains("<td class=\"animal-name\">German Shepard</td>"));
    assert!(page.contains("<img src=\"assets/tiger.jpg\" width=\"50\" height=\"50\" alt=\"Tiger\">"));
    assert!(page.contains("<td>Africa and Asia</td>"));
    assert!(page.contains("<td>15 ft</td>"));
    assert!(!page.contains("role=\"alert\""));
}

#[test]
fn test_text_render_of_seeded_dogs() {
    let session = session();
    let dogs = session.render(&"dogs".into()).unwrap();
    let text = render_text(&dogs);

    assert!(text.starts_with("Dogs\n"));
    assert!(text.contains("German Shepard"));
    assert!(text.ends_with("4 row(s)\n"));
}

#[test]
fn test_render_model_serializes() {
    let session = session();
    let json = serde_json::to_value(session.render(&"dogs".into()).unwrap()).unwrap();

    assert_eq!(json["id"], "dogs");
    assert_eq!(json["label"], "Dogs");
    assert_eq!(json["rows"][0]["name"], "Rottweiler");
    assert_eq!(json["rows"][0]["size_label"], "2 ft");
    assert_eq!(json["rows"][0]["actions"][0]["command"], "edit");
}

#[test]
fn test_large_and_fractional_size_labels() {
    use animal_tables::render::render_table;
    use animal_tables::{AnimalRecord, AnimalTable, TableId};

    let mut table = AnimalTable::new("Big Fish");
    table.add(AnimalRecord::new("Kraken", "k.jpg", "Sea", 1e20)).unwrap();
    table.add(AnimalRecord::new("Blue Whale", "b.jpg", "Ocean", 98.25)).unwrap();
    table.add(AnimalRecord::new("Krill", "kr.jpg", "Ocean", 0.05)).unwrap();

    let view = render_table(&TableId::new("big-fish"), &table, "ft");
    let labels: Vec<&str> = view.rows.iter().map(|r| r.size_label.as_str()).collect();
    assert_eq!(labels, vec!["100000000000000000000 ft", "98.25 ft", "0.05 ft"]);

    let page = render_page(&[view], &[]);
    assert!(page.contains("<input name=\"size\" value=\"100000000000000000000\""));
}
