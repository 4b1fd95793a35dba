//! Synthetic placement data shared by the integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use placement_predictor::dataset::RawTable;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HEADERS: [&str; 12] = [
    "StudentID",
    "CGPA",
    "Internships",
    "Projects",
    "Certifications",
    "AptitudeTestScore",
    "SoftSkillsRating",
    "ExtracurricularActivities",
    "PlacementTraining",
    "SSC_Marks",
    "HSC_Marks",
    "PlacementStatus",
];

pub const FEATURES: [&str; 10] = [
    "CGPA",
    "Internships",
    "Projects",
    "Certifications",
    "AptitudeTestScore",
    "SoftSkillsRating",
    "ExtracurricularActivities",
    "PlacementTraining",
    "SSC_Marks",
    "HSC_Marks",
];

fn yes_no(flag: bool) -> String {
    let value = if flag { "Yes" } else { "No" };
    value.to_string()
}

/// Rows where `CGPA > 8` is always `Placed` and everything else is noise.
pub fn synthetic_rows(count: usize, seed: u64) -> Vec<Vec<String>> {
    let mut rng = StdRng::seed_from_u64(seed);

    (0..count)
        .map(|i| {
            let cgpa: f64 = (rng.random_range(50..=100) as f64) / 10.0;
            let placed = cgpa > 8.0;
            vec![
                (i + 1).to_string(),
                format!("{cgpa:.1}"),
                rng.random_range(0..=3).to_string(),
                rng.random_range(0..=3).to_string(),
                rng.random_range(0..=3).to_string(),
                rng.random_range(40..=100).to_string(),
                format!("{:.1}", rng.random_range(30..=50) as f64 / 10.0),
                yes_no(rng.random_bool(0.5)),
                yes_no(rng.random_bool(0.5)),
                rng.random_range(50..=100).to_string(),
                rng.random_range(50..=100).to_string(),
                (if placed { "Placed" } else { "NotPlaced" }).to_string(),
            ]
        })
        .collect()
}

pub fn synthetic_table(count: usize, seed: u64) -> RawTable {
    RawTable::from_rows(HEADERS, synthetic_rows(count, seed)).unwrap()
}

pub fn synthetic_csv(count: usize, seed: u64) -> String {
    let mut csv = HEADERS.join(",");
    for row in synthetic_rows(count, seed) {
        csv.push('\n');
        csv.push_str(&row.join(","));
    }
    csv
}

/// A complete, valid raw input for one student.
pub fn student(cgpa: &str) -> HashMap<String, String> {
    [
        ("CGPA", cgpa),
        ("Internships", "1"),
        ("Projects", "2"),
        ("Certifications", "1"),
        ("AptitudeTestScore", "78"),
        ("SoftSkillsRating", "4.2"),
        ("ExtracurricularActivities", "Yes"),
        ("PlacementTraining", "No"),
        ("SSC_Marks", "74"),
        ("HSC_Marks", "81"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
