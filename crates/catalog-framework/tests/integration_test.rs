use catalog_framework::{Collection, CollectionError, Record};

#[derive(Debug, Clone, PartialEq)]
struct Ticket {
    id: u32,
    seat: String,
}

impl Ticket {
    fn new(id: u32, seat: &str) -> Self {
        Self {
            id,
            seat: seat.to_string(),
        }
    }
}

impl Record for Ticket {
    type Id = u32;
    const KIND: &'static str = "ticket";

    fn id(&self) -> &u32 {
        &self.id
    }
}

#[derive(Debug)]
struct Tag {
    id: String,
}

impl Record for Tag {
    type Id = String;
    const KIND: &'static str = "tag";

    fn id(&self) -> &String {
        &self.id
    }
}

#[test]
fn add_preserves_insertion_order() {
    let mut tickets = Collection::new();
    assert!(tickets.add(Ticket::new(3, "C1")));
    assert!(tickets.add(Ticket::new(1, "A1")));
    assert!(tickets.add(Ticket::new(2, "B1")));

    let ids: Vec<u32> = tickets.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![3, 1, 2]);
}

#[test]
fn duplicate_id_is_rejected_and_collection_unchanged() {
    let mut tickets = Collection::new();
    assert!(tickets.add(Ticket::new(1, "A1")));
    assert!(!tickets.add(Ticket::new(1, "Z9")));

    assert_eq!(tickets.len(), 1);
    assert_eq!(tickets.get_all()[0].seat, "A1");
}

#[test]
fn try_add_reports_duplicate() {
    let mut tickets = Collection::new();
    tickets.try_add(Ticket::new(7, "G7")).unwrap();

    let err = tickets.try_add(Ticket::new(7, "G8")).unwrap_err();
    assert_eq!(
        err,
        CollectionError::DuplicateId {
            kind: "ticket",
            id: "7".to_string()
        }
    );
    assert_eq!(err.to_string(), "ticket 7 already exists");
}

#[test]
fn remove_existing_and_missing() {
    let mut tickets = Collection::new();
    tickets.add(Ticket::new(1, "A1"));
    tickets.add(Ticket::new(2, "B1"));

    assert!(tickets.remove(&2));
    assert_eq!(tickets.get_all(), &[Ticket::new(1, "A1")]);

    assert!(!tickets.remove(&99));
    assert_eq!(tickets.get_all(), &[Ticket::new(1, "A1")]);
}

#[test]
fn try_remove_returns_the_record() {
    let mut tickets = Collection::new();
    tickets.add(Ticket::new(5, "E5"));

    let removed = tickets.try_remove(&5).unwrap();
    assert_eq!(removed.seat, "E5");
    assert!(tickets.is_empty());

    let err = tickets.try_remove(&5).unwrap_err();
    assert!(matches!(err, CollectionError::NotFound { kind: "ticket", .. }));
}

#[test]
fn string_ids_can_be_looked_up_by_str() {
    let mut tags = Collection::new();
    tags.add(Tag { id: "rust".into() });
    tags.add(Tag { id: "books".into() });

    assert!(tags.contains("books"));
    assert_eq!(tags.get("rust").map(|t| t.id.as_str()), Some("rust"));
    assert!(tags.get("python").is_none());

    assert!(tags.remove("rust"));
    assert!(!tags.contains("rust"));
    assert_eq!(tags.len(), 1);
}

#[test]
fn get_mut_changes_the_stored_record() {
    let mut tickets = Collection::new();
    tickets.add(Ticket::new(1, "A1"));

    if let Some(ticket) = tickets.get_mut(&1) {
        ticket.seat = "A2".to_string();
    }
    assert_eq!(tickets.get(&1).unwrap().seat, "A2");
    assert!(tickets.get_mut(&42).is_none());
}

#[test]
fn borrowed_iteration_visits_every_record() {
    let mut tickets = Collection::new();
    for id in 1..=4 {
        tickets.add(Ticket::new(id, "X"));
    }

    let mut total = 0;
    for ticket in &tickets {
        total += ticket.id;
    }
    assert_eq!(total, 10);
}
