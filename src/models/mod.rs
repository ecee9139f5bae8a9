use serde::{Deserialize, Serialize};

use crate::cargo_client::CargoRecord;

/// A competitive region entry for the frontend dropdown.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Region {
    pub code: String,
    pub name: String,
    pub region: String,
}

/// A tournament summary in the shape the frontend expects.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

impl Tournament {
    /// Converts one Tournaments row to the response format. Missing fields
    /// collapse to empty strings rather than failing the whole response.
    pub fn from_record(record: &CargoRecord) -> Tournament {
        let name = record.get_str("Name").to_string();

        Tournament {
            id: name.clone(),
            name,
            start_date: record.get_str("DateStart").to_string(),
            end_date: record.get_str("Date").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> CargoRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn tournament_id_mirrors_name() {
        let t = Tournament::from_record(&record(json!({
            "Name": "LCK 2024 Spring",
            "DateStart": "2024-01-17",
            "Date": "2024-04-14"
        })));

        assert_eq!(t.id, "LCK 2024 Spring");
        assert_eq!(t.name, "LCK 2024 Spring");
        assert_eq!(t.start_date, "2024-01-17");
        assert_eq!(t.end_date, "2024-04-14");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let t = Tournament::from_record(&record(json!({"Name": "Worlds 2020"})));

        assert_eq!(t.start_date, "");
        assert_eq!(t.end_date, "");
    }

    #[test]
    fn dates_serialize_in_camel_case() {
        let t = Tournament::from_record(&record(json!({
            "Name": "MSI 2023",
            "DateStart": "2023-05-02",
            "Date": "2023-05-21"
        })));

        let value = serde_json::to_value(&t).unwrap();
        assert_eq!(value["startDate"], "2023-05-02");
        assert_eq!(value["endDate"], "2023-05-21");
    }
}
