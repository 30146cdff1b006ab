/// Renders a fractional hour count as `2h 14m 5s`.
pub fn human_duration(hours: f64) -> String {
    let total = (hours * 3600.0).round().max(0.0) as u64;
    let (h, m, s) = (total / 3600, total % 3600 / 60, total % 60);

    if h > 0 {
        format!("{h}h {m}m {s}s")
    } else if m > 0 {
        format!("{m}m {s}s")
    } else {
        format!("{s}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_duration_picks_sensible_units() {
        assert_eq!(human_duration(0.0), "0s");
        assert_eq!(human_duration(30.0 / 3600.0), "30s");
        assert_eq!(human_duration(0.5), "30m 0s");
        assert_eq!(human_duration(3031.0 / 3600.0), "50m 31s");
        assert_eq!(human_duration(2.25), "2h 15m 0s");
        assert_eq!(human_duration(-1.0), "0s");
    }
}
