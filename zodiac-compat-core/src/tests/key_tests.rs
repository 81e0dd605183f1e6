use super::*;

#[test]
fn sorted_and_joined() {
    assert_eq!(CompatKey::new("Rat", "Ox").as_str(), "Ox-Rat");
    assert_eq!(CompatKey::new("Ox", "Rat").as_str(), "Ox-Rat");
}

#[test]
fn symmetric_for_every_sign_pair() {
    for &a in Sign::all() {
        for &b in Sign::all() {
            assert_eq!(
                CompatKey::from_signs(a, b),
                CompatKey::from_signs(b, a),
                "key({a}, {b}) != key({b}, {a})"
            );
        }
    }
}

#[test]
fn same_sign_pair() {
    assert_eq!(CompatKey::from_signs(Sign::Dog, Sign::Dog).as_str(), "Dog-Dog");
}

#[test]
fn whitespace_is_trimmed() {
    assert_eq!(CompatKey::new("  Tiger ", "\nHorse"), CompatKey::new("Horse", "Tiger"));
}

#[test]
fn uppercase_sorts_before_lowercase() {
    // Byte order, same as JavaScript's default sort.
    assert_eq!(CompatKey::new("rat", "Rat").as_str(), "Rat-rat");
}

#[test]
fn members_split_back() {
    let key = CompatKey::from_signs(Sign::Pig, Sign::Dragon);
    assert_eq!(key.members(), ("Dragon", "Pig"));
}

#[test]
fn string_and_enum_construction_agree() {
    for &a in Sign::all() {
        for &b in Sign::all() {
            assert_eq!(CompatKey::from_signs(a, b), CompatKey::new(a.name(), b.name()));
        }
    }
}
