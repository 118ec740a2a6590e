use anyhow::Result;

use carepoint_core::catalog::Catalog;
use carepoint_core::AppConfig;

pub async fn run(config: &AppConfig, search: Option<&str>, json: bool) -> Result<()> {
    let catalog = Catalog::load(&config.catalog_path())?;
    let hospitals = catalog.search_hospitals(search.unwrap_or_default());

    if json {
        println!("{}", serde_json::to_string_pretty(&hospitals)?);
        return Ok(());
    }

    if hospitals.is_empty() {
        println!("No hospitals match '{}'", search.unwrap_or_default());
        return Ok(());
    }

    println!("Hospitals ({}):\n", hospitals.len());
    for hospital in hospitals {
        println!("  [{}] {}", hospital.id, hospital.name);
        println!("    {}", hospital.location);
        println!(
            "    Open: {}  Doctors: {}",
            hospital.timing, hospital.active_doctors
        );
        println!();
    }

    Ok(())
}
