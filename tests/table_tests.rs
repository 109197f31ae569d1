use animal_tables::core::locale_cmp;
use animal_tables::{AnimalRecord, AnimalTable, Rejection};
use std::cmp::Ordering;

fn animal(name: &str, location: &str, size: f64) -> AnimalRecord {
    AnimalRecord::new(name, format!("{}.jpg", name.to_lowercase()), location, size)
}

fn names(table: &AnimalTable) -> Vec<String> {
    table.list().iter().map(|r| r.name.clone()).collect()
}

fn cats() -> AnimalTable {
    let mut table = AnimalTable::new("Big Cats");
    table.add(animal("Tiger", "Asia", 10.0)).unwrap();
    table.add(animal("Lion", "Africa", 8.0)).unwrap();
    table.add(animal("Leopard", "Africa and Asia", 5.0)).unwrap();
    table
}

#[test]
fn test_dogs_scenario() {
    let mut dogs = AnimalTable::new("Dogs");

    // 1. First Rex goes in
    dogs.add(AnimalRecord::new("Rex", "r.jpg", "UK", 2.0)).unwrap();
    assert_eq!(names(&dogs), vec!["Rex"]);

    // 2. Second Rex is a duplicate
    let err = dogs
        .add(AnimalRecord::new("Rex", "other.jpg", "France", 3.0))
        .unwrap_err();
    assert_eq!(err, Rejection::DuplicateName("Rex".to_string()));
    assert_eq!(dogs.list(), &[AnimalRecord::new("Rex", "r.jpg", "UK", 2.0)]);

    // 3. Empty image is invalid
    let err = dogs
        .add(AnimalRecord::new("Fido", "", "UK", 2.0))
        .unwrap_err();
    assert_eq!(err, Rejection::InvalidRecord("Fido".to_string()));
    assert_eq!(dogs.len(), 1);
}

#[test]
fn test_invalid_records_rejected() {
    let invalid = [
        AnimalRecord::new("", "a.jpg", "UK", 1.0),
        AnimalRecord::new("A", "", "UK", 1.0),
        AnimalRecord::new("A", "a.jpg", "", 1.0),
        AnimalRecord::new("A", "a.jpg", "UK", 0.0),
        AnimalRecord::new("A", "a.jpg", "UK", -2.0),
        AnimalRecord::new("A", "a.jpg", "UK", f64::NAN),
    ];
    for record in invalid {
        let mut table = AnimalTable::new("Dogs");
        assert!(matches!(table.add(record), Err(Rejection::InvalidRecord(_))));
        assert!(table.is_empty());
    }
}

#[test]
fn test_duplicate_reported_before_invalid() {
    let mut table = cats();
    let err = table.add(AnimalRecord::new("Lion", "", "", 0.0)).unwrap_err();
    assert!(matches!(err, Rejection::DuplicateName(name) if name == "Lion"));
}

#[test]
fn test_remove() {
    let mut table = cats();
    table.remove("Lion");
    assert_eq!(names(&table), vec!["Tiger", "Leopard"]);

    // Absent name: nothing changes
    let before = table.list().to_vec();
    table.remove("Puma");
    assert_eq!(table.list(), before.as_slice());
}

#[test]
fn test_remove_drops_every_match() {
    // replace() can introduce a second row with the same name
    let mut table = cats();
    table.replace("Leopard", animal("Tiger", "Asia", 9.0));
    table.remove("Tiger");
    assert_eq!(names(&table), vec!["Lion"]);
}

#[test]
fn test_sort_by_size() {
    let mut table = cats();
    table.sort_by_size();
    assert_eq!(names(&table), vec!["Leopard", "Lion", "Tiger"]);
    let sizes: Vec<f64> = table.list().iter().map(|r| r.size).collect();
    assert_eq!(sizes, vec![5.0, 8.0, 10.0]);
}

#[test]
fn test_sort_by_name_is_ordered_and_idempotent() {
    let mut table = AnimalTable::new("Mixed");
    for name in ["tiger", "Cheetah", "lion", "Caracal", "jaguar", "Leopard"] {
        table.add(animal(name, "Africa", 1.0)).unwrap();
    }

    table.sort_by_name();
    let once = names(&table);
    for pair in once.windows(2) {
        assert_ne!(locale_cmp(&pair[0], &pair[1]), Ordering::Greater);
    }
    assert_eq!(once, vec!["Caracal", "Cheetah", "jaguar", "Leopard", "lion", "tiger"]);

    table.sort_by_name();
    assert_eq!(names(&table), once);
}

#[test]
fn test_sort_by_location() {
    let mut table = cats();
    table.add(animal("Jaguar", "Amazon", 5.0)).unwrap();
    table.sort_by_location();
    assert_eq!(names(&table), vec!["Lion", "Leopard", "Jaguar", "Tiger"]);
}

#[test]
fn test_replace_keeps_position_without_revalidation() {
    let mut table = cats();
    table.replace("Lion", AnimalRecord::new("Lion2", "x", "Asia", 9.0));
    assert_eq!(names(&table), vec!["Tiger", "Lion2", "Leopard"]);
    assert_eq!(table.list()[1], AnimalRecord::new("Lion2", "x", "Asia", 9.0));

    // Colliding name and invalid data are both accepted
    table.replace("Lion2", AnimalRecord::new("Tiger", "", "", -1.0));
    assert_eq!(names(&table), vec!["Tiger", "Tiger", "Leopard"]);
    assert!(!table.list()[1].validate());
}

#[test]
fn test_list_reflects_mutations_after_sort() {
    let mut table = cats();
    table.sort_by_size();
    table.add(animal("Caracal", "Africa", 3.0)).unwrap();
    // New rows are appended after the sorted ones
    assert_eq!(names(&table), vec!["Leopard", "Lion", "Tiger", "Caracal"]);
}

#[test]
fn test_sort_by_name_places_accented_names_with_base_letter() {
    let mut table = AnimalTable::new("Deer");
    for name in ["Zebu", "Élan", "Emu", "elk", "Äffchen"] {
        table.add(animal(name, "Europe", 1.0)).unwrap();
    }

    table.sort_by_name();
    assert_eq!(names(&table), vec!["Äffchen", "Élan", "elk", "Emu", "Zebu"]);
}

#[test]
fn test_sort_by_location_folds_accents() {
    let mut table = AnimalTable::new("Birds");
    table.add(animal("Macaw", "Venezuela", 1.0)).unwrap();
    table.add(animal("Toucan", "São Paulo", 1.0)).unwrap();
    table.add(animal("Rhea", "Sudan", 1.0)).unwrap();
    table.add(animal("Stork", "Österreich", 1.0)).unwrap();

    table.sort_by_location();
    assert_eq!(names(&table), vec!["Stork", "Toucan", "Rhea", "Macaw"]);
}
