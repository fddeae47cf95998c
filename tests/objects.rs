use enumkit::{method, Domain, EnumError, Enumerated, MethodMap, ObjectEnum, ObjectVariant};

fn speak(line: &'static str) -> MethodMap<ObjectVariant> {
    let mut map = MethodMap::new();
    map.insert("speak".into(), method(move |_: &ObjectVariant| line.into()));
    map
}

fn animal() -> ObjectEnum {
    ObjectEnum::new([
        ("DOG", speak("woof!")),
        ("CAT", speak("meow!")),
        ("GIRAFFE", MethodMap::new()),
    ])
    .methods(speak("..."))
    .unwrap()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn declaration_order_positions() {
    let animal = animal();
    assert_eq!(animal.len(), 3);
    assert_eq!(animal.variant("DOG").unwrap().to_int(), 0);
    assert_eq!(animal.variant("CAT").unwrap().to_int(), 1);
    assert_eq!(animal.variant("GIRAFFE").unwrap().to_int(), 2);
    assert!(!animal.is_empty());
}

#[test]
#[should_panic(expected = "enumeration needs at least one name")]
fn empty_declaration_panics() {
    let _ = ObjectEnum::new(Vec::<(String, MethodMap<ObjectVariant>)>::new());
}

#[test]
#[should_panic(expected = "duplicate variant name 'DOG'")]
fn duplicate_name_panics() {
    let _ = ObjectEnum::new([("DOG", MethodMap::new()), ("DOG", MethodMap::new())]);
}

// =============================================================================
// Per-variant behavior
// =============================================================================

#[test]
fn own_methods_answer_first() {
    let animal = animal();
    assert_eq!(animal.variant("DOG").unwrap().call("speak").unwrap(), "woof!");
    assert_eq!(animal.variant("CAT").unwrap().call("speak").unwrap(), "meow!");
}

#[test]
fn shared_methods_fill_the_gaps() {
    let animal = animal();
    assert_eq!(
        animal.variant("GIRAFFE").unwrap().call("speak").unwrap(),
        "..."
    );
}

#[test]
fn own_methods_shadow_shared_ones() {
    // DOG defines its own speak; the shared "..." must not win.
    let animal = animal();
    assert_eq!(animal.from_int(0).unwrap().call("speak").unwrap(), "woof!");
}

#[test]
fn unknown_method_fails() {
    let animal = animal();
    assert_eq!(
        animal.variant("DOG").unwrap().call("fly").unwrap_err(),
        EnumError::UnknownMethod { name: "fly".into() }
    );
}

#[test]
fn variants_without_shared_registration() {
    let lonely = ObjectEnum::new([("DOG", speak("woof!")), ("GIRAFFE", MethodMap::new())]);
    assert_eq!(lonely.variant("DOG").unwrap().call("speak").unwrap(), "woof!");
    assert_eq!(
        lonely.variant("GIRAFFE").unwrap().call("speak").unwrap_err(),
        EnumError::UnknownMethod {
            name: "speak".into()
        }
    );
}

// =============================================================================
// Shared contract
// =============================================================================

#[test]
fn behaves_like_a_closed_enumeration() {
    let animal = animal();
    assert_eq!(animal.first().unwrap().to_string(), "DOG");
    assert_eq!(animal.last().unwrap().to_string(), "GIRAFFE");
    assert_eq!(animal.from_int(1).unwrap().to_string(), "CAT");
    assert_eq!(
        animal.from_int(3).unwrap_err(),
        EnumError::UnknownValue { value: 3 }
    );
}

#[test]
fn boundary_stepping_fails() {
    let animal = animal();
    assert!(animal.last().unwrap().next().is_err());
    assert!(animal.first().unwrap().previous().is_err());
}

#[test]
fn lookups_agree_on_identity() {
    let animal = animal();
    assert_eq!(animal.variant("CAT").unwrap(), animal.from_int(1).unwrap());
}

#[test]
fn second_registration_fails() {
    let animal = animal();
    assert_eq!(
        animal.methods(MethodMap::new()).unwrap_err(),
        EnumError::AlreadyExtended
    );
}
