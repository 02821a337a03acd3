// tests/report_writer.rs
mod common;

use std::fs;

use shop_scrape::data::{ContactInfo, Product, ReportRow};
use shop_scrape::file::write_report;

use common::HEADER_LINE;

#[test]
fn fixed_columns_for_any_product_count() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("deeper").join("report.csv");

    let many = (1..=7)
        .map(|i| Product { title: Some(format!("P{i}")), image_url: Some(format!("https://cdn/p{i}.jpg")) })
        .collect();
    let rows = vec![
        ReportRow { domain: "none.example.com".into(), contact: ContactInfo::default(), products: vec![] },
        ReportRow {
            domain: "many.example.com".into(),
            contact: ContactInfo {
                email: Some("hi@many.example.com".into()),
                facebook_url: Some("https://facebook.com/many".into()),
                twitter_url: None,
            },
            products: many,
        },
    ];

    write_report(&out, &rows).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], HEADER_LINE);
    assert_eq!(lines[1], "none.example.com,,,,,,,,,,,,,");
    assert_eq!(
        lines[2],
        "many.example.com,hi@many.example.com,https://facebook.com/many,,\
         P1,https://cdn/p1.jpg,P2,https://cdn/p2.jpg,P3,https://cdn/p3.jpg,\
         P4,https://cdn/p4.jpg,P5,https://cdn/p5.jpg"
    );
}

#[test]
fn fields_with_commas_are_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");
    let rows = vec![ReportRow {
        domain: "q.example.com".into(),
        contact: ContactInfo::default(),
        products: vec![Product { title: Some("Mug, \"large\"".into()), image_url: None }],
    }];

    write_report(&out, &rows).unwrap();
    let text = fs::read_to_string(&out).unwrap();
    assert!(text.ends_with("q.example.com,,,,\"Mug, \"\"large\"\"\",,,,,,,,,\n"));
}
