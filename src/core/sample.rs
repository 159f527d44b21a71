// StatusBoard - core/sample.rs
//
// Fixed demonstration datasets: a project list with a status and a start
// date column, and an inventory list whose status column matches none of
// the bucket keywords and which has no date column.

use crate::core::model::{CellValue, Dataset};

/// A named sample dataset and the worksheet it is written to.
#[derive(Debug, Clone)]
pub struct SampleSheet {
    pub file_name: &'static str,
    pub sheet_name: &'static str,
    pub dataset: Dataset,
    /// Columns whose value counts are printed after generation.
    pub breakdown_columns: &'static [&'static str],
}

/// Both samples, in the order they are generated.
pub fn all() -> Vec<SampleSheet> {
    vec![
        SampleSheet {
            file_name: "project_data.xlsx",
            sheet_name: "Projects",
            dataset: project_dataset(),
            breakdown_columns: &[],
        },
        SampleSheet {
            file_name: "inventory_data.xlsx",
            sheet_name: "Inventory",
            dataset: inventory_dataset(),
            breakdown_columns: &["Stock Status", "Category"],
        },
    ]
}

/// Eight projects: four in progress, two completed, two pending.
pub fn project_dataset() -> Dataset {
    const ROWS: [(&str, &str, &str, &str, &str, &str, f64, f64, &str, f64); 8] = [
        ("PRJ-001", "Website Redesign", "In Progress", "John Smith", "2026-01-15", "2026-03-15", 65.0, 150000.0, "High", 5.0),
        ("PRJ-002", "Mobile App Development", "Completed", "Sarah Johnson", "2025-11-01", "2026-01-31", 100.0, 200000.0, "Medium", 8.0),
        ("PRJ-003", "Database Migration", "In Progress", "Mike Chen", "2026-01-20", "2026-04-30", 45.0, 180000.0, "High", 6.0),
        ("PRJ-004", "Cloud Infrastructure", "Pending", "Emily Davis", "2026-02-01", "2026-05-30", 0.0, 250000.0, "Low", 10.0),
        ("PRJ-005", "CRM Integration", "In Progress", "Robert Wilson", "2025-12-15", "2026-03-30", 80.0, 120000.0, "High", 4.0),
        ("PRJ-006", "Security Audit", "Completed", "Lisa Anderson", "2025-10-01", "2026-01-15", 100.0, 80000.0, "Medium", 3.0),
        ("PRJ-007", "API Development", "Pending", "David Lee", "2026-02-10", "2026-06-30", 10.0, 160000.0, "Medium", 7.0),
        ("PRJ-008", "Data Analytics Platform", "In Progress", "Jennifer Brown", "2026-01-05", "2026-05-15", 55.0, 300000.0, "High", 9.0),
    ];

    let columns = [
        "Project ID",
        "Project Name",
        "Status",
        "Owner",
        "Start Date",
        "End Date",
        "Progress (%)",
        "Budget ($)",
        "Priority",
        "Team Size",
    ];

    let rows = ROWS
        .iter()
        .map(|&(id, name, status, owner, start, end, progress, budget, priority, team)| {
            vec![
                CellValue::from(id),
                CellValue::from(name),
                CellValue::from(status),
                CellValue::from(owner),
                CellValue::from(start),
                CellValue::from(end),
                CellValue::from(progress),
                CellValue::from(budget),
                CellValue::from(priority),
                CellValue::from(team),
            ]
        })
        .collect();

    Dataset::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

/// Ten stock items across four categories.
pub fn inventory_dataset() -> Dataset {
    const ROWS: [(&str, &str, &str, f64, f64, f64, &str, &str, &str, &str); 10] = [
        ("INV-1001", "Wireless Mouse", "Electronics", 150.0, 50.0, 29.99, "TechCorp", "In Stock", "2026-01-15", "A-12"),
        ("INV-1002", "Mechanical Keyboard", "Electronics", 85.0, 30.0, 89.99, "KeyMaster Inc", "In Stock", "2026-02-01", "A-15"),
        ("INV-1003", "USB-C Cable", "Accessories", 320.0, 100.0, 12.99, "CableWorks", "In Stock", "2026-01-28", "B-03"),
        ("INV-1004", "Laptop Stand", "Furniture", 45.0, 20.0, 149.99, "OfficeMax", "Low Stock", "2025-12-10", "C-08"),
        ("INV-1005", "Webcam HD", "Electronics", 120.0, 40.0, 79.99, "VisionTech", "In Stock", "2026-01-20", "A-18"),
        ("INV-1006", "Bluetooth Headset", "Electronics", 95.0, 35.0, 59.99, "AudioPro", "In Stock", "2026-02-05", "A-20"),
        ("INV-1007", "External SSD 1TB", "Storage", 60.0, 25.0, 129.99, "DataStore", "In Stock", "2026-01-25", "B-11"),
        ("INV-1008", "Monitor 27 inch", "Electronics", 30.0, 15.0, 399.99, "DisplayCo", "Low Stock", "2025-11-15", "C-15"),
        ("INV-1009", "Docking Station", "Accessories", 55.0, 20.0, 189.99, "ConnectHub", "In Stock", "2026-02-08", "B-05"),
        ("INV-1010", "Ergonomic Chair", "Furniture", 25.0, 10.0, 599.99, "ComfortPlus", "Critical", "2025-10-20", "D-02"),
    ];

    let columns = [
        "SKU",
        "Product Name",
        "Category",
        "Quantity in Stock",
        "Reorder Level",
        "Unit Price",
        "Supplier",
        "Stock Status",
        "Last Restocked",
        "Warehouse Location",
    ];

    let rows = ROWS
        .iter()
        .map(|&(sku, name, category, qty, reorder, price, supplier, status, restocked, location)| {
            vec![
                CellValue::from(sku),
                CellValue::from(name),
                CellValue::from(category),
                CellValue::from(qty),
                CellValue::from(reorder),
                CellValue::from(price),
                CellValue::from(supplier),
                CellValue::from(status),
                CellValue::from(restocked),
                CellValue::from(location),
            ]
        })
        .collect();

    Dataset::new(columns.iter().map(|c| c.to_string()).collect(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::View;
    use crate::core::metrics::category_distribution;

    #[test]
    fn test_sample_shapes() {
        let projects = project_dataset();
        assert_eq!(projects.len(), 8);
        assert_eq!(projects.columns().len(), 10);

        let inventory = inventory_dataset();
        assert_eq!(inventory.len(), 10);
        assert_eq!(inventory.columns()[7], "Stock Status");
    }

    #[test]
    fn test_inventory_status_counts() {
        let inventory = inventory_dataset();
        let dist = category_distribution(&View::full(&inventory), "Stock Status");
        assert_eq!(
            dist,
            vec![
                (CellValue::from("In Stock"), 7),
                (CellValue::from("Low Stock"), 2),
                (CellValue::from("Critical"), 1),
            ]
        );
    }

    #[test]
    fn test_all_lists_both_sheets() {
        let names: Vec<&str> = all().iter().map(|s| s.sheet_name).collect();
        assert_eq!(names, vec!["Projects", "Inventory"]);
    }
}
