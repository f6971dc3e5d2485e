use chrono::NaiveDate;

use crate::config;

#[derive(Clone, Debug, PartialEq)]
pub struct CertificateData {
    pub student_name: String,
    pub course_name: String,
    pub completion_date: NaiveDate,
    pub certificate_id: String,
}

impl CertificateData {
    /// The page a QR code on the certificate would point to.
    pub fn verification_url(&self) -> String {
        format!(
            "{}/{}",
            config::VERIFY_BASE_URL,
            urlencoding::encode(&self.certificate_id)
        )
    }

    pub fn completion_date_label(&self) -> String {
        self.completion_date.format("%B %-d, %Y").to_string()
    }
}

pub fn sample_certificate() -> CertificateData {
    CertificateData {
        student_name: "Priya Sharma".to_string(),
        course_name: "Digital Marketing Essentials".to_string(),
        completion_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default(),
        certificate_id: "SB-2024-DM-001".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_links_to_verification_page() {
        assert_eq!(
            sample_certificate().verification_url(),
            "https://skillbridge.edu/verify/SB-2024-DM-001"
        );
    }

    #[test]
    fn odd_ids_are_percent_encoded() {
        let mut cert = sample_certificate();
        cert.certificate_id = "SB 2024/01".to_string();
        assert_eq!(
            cert.verification_url(),
            "https://skillbridge.edu/verify/SB%202024%2F01"
        );
    }

    #[test]
    fn completion_date_reads_naturally() {
        assert_eq!(sample_certificate().completion_date_label(), "March 15, 2024");

        let mut cert = sample_certificate();
        cert.completion_date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(cert.completion_date_label(), "January 5, 2025");
    }
}
