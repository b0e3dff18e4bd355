/// Formate une durée en secondes vers la forme `H:MM:SS` attendue par les
/// variables de position AVTransport (heures non paddées, `0:00:00` minimum).
///
/// Les valeurs négatives ou non finies sont ramenées à zéro : les moteurs de
/// lecture rapportent parfois des positions transitoires invalides pendant un
/// changement de fichier.
///
/// # Exemples
///
/// ```
/// use vdutils::format_dlna_time;
///
/// assert_eq!(format_dlna_time(3661.0), "1:01:01");
/// ```
pub fn format_dlna_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    };

    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    format!("{}:{:02}:{:02}", hours, minutes, secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_stopped_position() {
        assert_eq!(format_dlna_time(0.0), "0:00:00");
    }

    #[test]
    fn sub_minute_values() {
        assert_eq!(format_dlna_time(59.0), "0:00:59");
        assert_eq!(format_dlna_time(59.9), "0:00:59");
    }

    #[test]
    fn hour_boundaries() {
        assert_eq!(format_dlna_time(3600.0), "1:00:00");
        assert_eq!(format_dlna_time(3661.0), "1:01:01");
    }

    #[test]
    fn hours_are_not_padded() {
        assert_eq!(format_dlna_time(36000.0), "10:00:00");
    }

    #[test]
    fn invalid_input_clamps_to_zero() {
        assert_eq!(format_dlna_time(-5.0), "0:00:00");
        assert_eq!(format_dlna_time(f64::NAN), "0:00:00");
        assert_eq!(format_dlna_time(f64::INFINITY), "0:00:00");
    }
}
