//! Stateless calculators behind the HTTP surface.
//!
//! Each one is a total function over its validated inputs; nothing
//! here touches shared state.

use crate::error::RequestError;

/// Scoville Heat Units per known pepper name
const SCOVILLE: &[(&str, i64)] = &[
    ("Poblano", 1500),
    ("Mirasol", 6000),
    ("Serrano", 15500),
    ("Cayenne", 40000),
    ("Thai", 75000),
    ("Habanero", 125000),
];

/// Final score of a delivery-robot game: 50 per delivered package,
/// -10 per collision, and a 500 bonus when deliveries outnumber
/// collisions.
pub fn final_score(
    obstacle_collisions: i64,
    packages_delivered: i64,
) -> Result<i64, RequestError> {
    if obstacle_collisions < 0 || packages_delivered < 0 {
        return Err(RequestError::Validation(
            "Obstacle collisions and packages delivered must be non-negative integers."
                .to_owned(),
        ));
    }

    let mut score = packages_delivered * 50 - obstacle_collisions * 10;
    if packages_delivered > obstacle_collisions {
        score += 500;
    }
    Ok(score)
}

/// Total price of a plate stack: red 3, green 4, blue 5.
pub fn sushi_bill(red_count: i64, green_count: i64, blue_count: i64) -> i64 {
    red_count * 3 + green_count * 4 + blue_count * 5
}

/// Total SHU of a comma-separated pepper list.
///
/// Names not in the table count as 0.
pub fn total_spiciness(pepper_list: &str) -> i64 {
    pepper_list
        .split(',')
        .map(|pepper| {
            SCOVILLE
                .iter()
                .find(|(name, _)| *name == pepper)
                .map(|(_, shu)| *shu)
                .unwrap_or(0)
        })
        .sum()
}

/// Run-length encode each line as space-joined `"count char"` tokens.
///
/// An empty line encodes to an empty string; an empty list of lines
/// is rejected.
pub fn encode_lines(lines: &[String]) -> Result<Vec<String>, RequestError> {
    if lines.is_empty() {
        return Err(RequestError::Validation(
            "At least one text line is required.".to_owned(),
        ));
    }

    Ok(lines.iter().map(|line| encode_line(line)).collect())
}

fn encode_line(line: &str) -> String {
    let mut tokens = Vec::new();

    let mut chars = line.chars();
    if let Some(first) = chars.next() {
        let mut current = first;
        let mut count = 1usize;
        for c in chars {
            if c == current {
                count += 1;
            } else {
                tokens.push(format!("{} {}", count, current));
                current = c;
                count = 1;
            }
        }
        tokens.push(format!("{} {}", count, current));
    }

    tokens.join(" ")
}
