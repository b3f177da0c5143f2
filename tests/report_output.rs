use std::collections::BTreeMap;

use purchase_report::report::{build_report, run_report, ReportOptions};
use purchase_report::sample;
use purchase_report::types::{Dataset, Product, Purchase, User};

fn example_dataset() -> Dataset {
    Dataset::new(
        vec![
            User::new(1, "Ivan", 18),
            User::new(2, "Anna", 25),
            User::new(3, "Bo", 30),
        ],
        vec![
            Product::new(1, "Mouse", 1200),
            Product::new(2, "Keyboard", 3500),
            Product::new(3, "Monitor", 9000),
        ],
        vec![
            Purchase::new(1, 1, 2),
            Purchase::new(2, 2, 1),
            Purchase::new(3, 3, 1),
        ],
    )
}

#[test]
fn example_scenario_views() {
    let report = build_report(&example_dataset(), &ReportOptions::default());

    let older: Vec<_> = report.older_users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(older, vec!["Anna", "Bo"]);

    let top: Vec<_> = report.top_products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(top, vec!["Monitor", "Keyboard", "Mouse"]);

    assert!(!report.user_bought_product);
    assert_eq!(
        report.spent_per_user,
        BTreeMap::from([(1, 2400), (2, 3500), (3, 9000)])
    );
    assert_eq!(report.top_buyer, Some(User::new(3, "Bo", 30)));
    assert_eq!(report.most_expensive, Some(Product::new(3, "Monitor", 9000)));
}

#[test]
fn example_scenario_text() {
    let mut out = Vec::new();
    run_report(&example_dataset(), &ReportOptions::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let expected = "\
=== All users ===
User(id=1, name=Ivan, age=18)
User(id=2, name=Anna, age=25)
User(id=3, name=Bo, age=30)

=== Users older than 21 ===
User(id=2, name=Anna, age=25)
User(id=3, name=Bo, age=30)

=== Top 3 most expensive products ===
Product(id=3, name=Monitor, price=9000)
Product(id=2, name=Keyboard, price=3500)
Product(id=1, name=Mouse, price=1200)

=== Check: did user=1 buy product=2 ===
false

=== Total spent per user (userId -> sum) ===
1 -> 2400
2 -> 3500
3 -> 9000

=== Top buyer ===
User(id=3, name=Bo, age=30)

=== Generic find_max: most expensive product ===
Product(id=3, name=Monitor, price=9000)
";
    assert_eq!(text, expected);
}

#[test]
fn sample_dataset_report() {
    let text = build_report(&sample::dataset(), &ReportOptions::default()).to_text();

    assert!(text.contains(
        "=== Users older than 21 ===\n\
         User(id=2, name=Anna, age=25)\n\
         User(id=3, name=Bo, age=30)\n\
         User(id=5, name=Oleg, age=42)\n\n"
    ));
    // Keyboard and Webcam tie on price; Keyboard comes first in the input.
    assert!(text.contains(
        "=== Top 3 most expensive products ===\n\
         Product(id=3, name=Monitor, price=9000)\n\
         Product(id=4, name=Headphones, price=4500)\n\
         Product(id=2, name=Keyboard, price=3500)\n\n"
    ));
    assert!(text.contains(
        "=== Total spent per user (userId -> sum) ===\n\
         1 -> 3300\n2 -> 9200\n3 -> 9600\n4 -> 7000\n5 -> 19200\n\n"
    ));
    assert!(text.contains("=== Top buyer ===\nUser(id=5, name=Oleg, age=42)\n"));
}

#[test]
fn zero_purchase_users_are_listed_with_zero() {
    let mut ds = example_dataset();
    ds.users.push(User::new(4, "Lena", 21));
    let report = build_report(&ds, &ReportOptions::default());
    assert_eq!(report.spent_per_user.get(&4), Some(&0));
    assert!(report.to_text().contains("3 -> 9000\n4 -> 0\n"));
}

#[test]
fn report_with_no_products_uses_placeholder() {
    let ds = Dataset::new(vec![User::new(1, "Ivan", 18)], vec![], vec![Purchase::new(1, 1, 1)]);
    let report = build_report(&ds, &ReportOptions::default());

    // Ivan has a total of 0 and is still the (only) top buyer.
    assert_eq!(report.spent_per_user, BTreeMap::from([(1, 0)]));
    assert_eq!(report.top_buyer.as_ref().map(|u| u.id), Some(1));
    assert!(report.to_text().ends_with("most expensive product ===\nno products\n"));
}
