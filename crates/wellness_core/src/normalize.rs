//! Bucket normalization: categorical range phrases to representative numbers.
//!
//! Matching is substring containment, not equality, so values arriving with
//! trailing annotations ("5-6 (neutral)", "7-8 hours or so") still resolve.
//! An unrecognized phrase falls through to the dimension default; this is
//! never an error.

/// Average daily steps. Default 5000.
pub fn steps(bucket: &str) -> f64 {
    if bucket.contains("less than 3000") {
        return 2000.0;
    }
    if bucket.contains("3000-5000") {
        return 4000.0;
    }
    if bucket.contains("5000-8000") {
        return 6500.0;
    }
    if bucket.contains("8000-10000") {
        return 9000.0;
    }
    if bucket.contains("10000-12000") {
        return 11000.0;
    }
    if bucket.contains("more than 12000") {
        return 13000.0;
    }
    5000.0
}

/// Exercise sessions per week. Default 2.
pub fn exercise_frequency(bucket: &str) -> f64 {
    if bucket.contains("never") {
        return 0.0;
    }
    if bucket.contains("1 time") {
        return 1.0;
    }
    if bucket.contains("2 times") {
        return 2.0;
    }
    if bucket.contains("3 times") {
        return 3.0;
    }
    if bucket.contains("4 times") {
        return 4.0;
    }
    if bucket.contains("5+") || bucket.contains("daily") {
        return 6.0;
    }
    2.0
}

/// Mood on the 1-10 scale. Default 5.
pub fn mood(bucket: &str) -> f64 {
    scale_midpoint(bucket, 5.0)
}

/// Stress on the 1-10 scale. Default 5.
pub fn stress(bucket: &str) -> f64 {
    scale_midpoint(bucket, 5.0)
}

// Mood and stress share the same 1-10 range phrases.
fn scale_midpoint(bucket: &str, default: f64) -> f64 {
    if bucket.contains("1-2") {
        return 1.5;
    }
    if bucket.contains("3-4") {
        return 3.5;
    }
    if bucket.contains("5-6") {
        return 5.5;
    }
    if bucket.contains("7-8") {
        return 7.5;
    }
    if bucket.contains("9-10") {
        return 9.5;
    }
    default
}

/// Sleep hours per night. Default 7.
pub fn sleep(bucket: &str) -> f64 {
    if bucket.contains("less than 5") {
        return 4.5;
    }
    if bucket.contains("5-6") {
        return 5.5;
    }
    if bucket.contains("6-7") {
        return 6.5;
    }
    if bucket.contains("7-8") {
        return 7.5;
    }
    if bucket.contains("8-9") {
        return 8.5;
    }
    if bucket.contains("more than 9") {
        return 9.5;
    }
    7.0
}

/// Water intake in liters per day. Default 2.0.
pub fn water(bucket: &str) -> f64 {
    if bucket.contains("less than 1L") {
        return 0.8;
    }
    if bucket.contains("1-1.5L") {
        return 1.25;
    }
    if bucket.contains("1.5-2L") {
        return 1.75;
    }
    if bucket.contains("2-2.5L") {
        return 2.25;
    }
    if bucket.contains("2.5-3L") {
        return 2.75;
    }
    if bucket.contains("more than 3L") {
        return 3.5;
    }
    2.0
}

/// Self-assessed nutrition quality on the 0-100 scale. Default 60.
pub fn nutrition(bucket: &str) -> f64 {
    if bucket.contains("poor") {
        return 30.0;
    }
    if bucket.contains("fair") {
        return 50.0;
    }
    if bucket.contains("good") {
        return 70.0;
    }
    if bucket.contains("excellent") {
        return 90.0;
    }
    60.0
}
