//! Embedded park project catalog.

use domain::models::project::{ContractStatus, Project};

fn project(
    id: &str,
    description: &str,
    park_name: &str,
    contract_status: ContractStatus,
    funding_amount: f64,
    progress_percent: u8,
    contractor: &str,
    resident_engineer: &str,
) -> Project {
    Project {
        id: id.to_string(),
        description: description.to_string(),
        park_name: park_name.to_string(),
        contract_status,
        funding_amount,
        progress_percent,
        contractor: contractor.to_string(),
        resident_engineer: resident_engineer.to_string(),
    }
}

/// The embedded project catalog.
pub fn dataset() -> Vec<Project> {
    vec![
        project(
            "P-2024-001",
            "Playground reconstruction and safety surfacing",
            "Riverside Park",
            ContractStatus::Active,
            2_450_000.0,
            45,
            "Hudson Valley Builders",
            "M. Okafor",
        ),
        project(
            "P-2024-007",
            "Dog run construction with drainage",
            "Elmwood Park",
            ContractStatus::Registered,
            380_000.0,
            0,
            "Cardinal Site Works",
            "J. Castellanos",
        ),
        project(
            "P-2023-112",
            "Esplanade reconstruction, phase 2",
            "Harbor View Park",
            ContractStatus::Active,
            7_900_000.0,
            62,
            "Meridian Marine Construction",
            "S. Bellweather",
        ),
        project(
            "P-2023-088",
            "Comfort station rehabilitation",
            "Glenhollow Park",
            ContractStatus::Substantial,
            1_150_000.0,
            93,
            "Pinnacle Restoration Group",
            "A. Dimitriou",
        ),
        project(
            "P-2022-140",
            "Synthetic turf field replacement",
            "Kestrel Field",
            ContractStatus::Closed,
            3_200_000.0,
            100,
            "Northside Field Systems",
            "M. Okafor",
        ),
        project(
            "P-2024-016",
            "Waterfront lighting upgrade",
            "Harbor View Park",
            ContractStatus::Active,
            940_000.0,
            28,
            "Beacon Electric",
            "S. Bellweather",
        ),
        project(
            "P-2024-022",
            "Greenway retaining wall repair",
            "Old Mill Greenway",
            ContractStatus::Registered,
            2_100_000.0,
            0,
            "Stonebridge Civil",
            "R. Calloway",
        ),
        project(
            "P-2023-063",
            "Adventure playground ADA upgrades",
            "Tamarack Park",
            ContractStatus::Substantial,
            1_760_000.0,
            88,
            "Cardinal Site Works",
            "A. Dimitriou",
        ),
    ]
}
