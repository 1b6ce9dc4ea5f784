use oxi_mambu::{models::CustomFieldType, MambuConfig, ServiceExecutor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let executor = ServiceExecutor::new(MambuConfig::from_env()?);
    let organization = executor.organization();

    let currency = organization.get_currency()?;
    println!("Base currency: {:?}", currency.code);

    let details = organization.get_organization()?;
    println!("Organization: {:?} at {:?}", details.name, details.address);

    for branch in organization.get_branches(Some("0"), Some("30"))? {
        println!("Branch {:?}: {:?}", branch.id, branch.name);
    }

    let sets = organization.get_custom_field_sets(Some(CustomFieldType::ClientInfo))?;
    println!("{} client custom field sets", sets.len());

    let logo = organization.get_branding_logo()?;
    println!("Logo: {} bytes", logo.len());
    Ok(())
}
