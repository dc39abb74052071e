use clap::Args;
use haven_app::{
    database,
    domain::{
        properties::{
            PgPropertiesService, PropertiesService, data::NewProperty, records::PropertyUuid,
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreatePropertyArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Owner account UUID
    #[arg(long)]
    owner_uuid: UserUuid,

    /// Owner display name
    #[arg(long, default_value = "")]
    owner_name: String,

    /// Owner phone or email shown to tenants
    #[arg(long, default_value = "")]
    owner_contact: String,

    /// Kind of property (residential, commercial, land, ...)
    #[arg(long)]
    property_type: String,

    /// Listing type (rent, sale)
    #[arg(long)]
    ad_type: String,

    /// Street address
    #[arg(long)]
    address: String,

    /// Asking amount
    #[arg(long)]
    amount: u64,

    /// Image path under the uploads directory; repeatable
    #[arg(long = "image")]
    images: Vec<String>,

    /// Free-form description
    #[arg(long, default_value = "")]
    additional_info: String,

    /// Optional property UUID; generated when omitted
    #[arg(long)]
    property_uuid: Option<PropertyUuid>,
}

pub(crate) async fn run(args: CreatePropertyArgs) -> Result<(), String> {
    for (flag, value) in [
        ("property-type", &args.property_type),
        ("ad-type", &args.ad_type),
        ("address", &args.address),
    ] {
        if value.trim().is_empty() {
            return Err(format!("{flag} cannot be empty"));
        }
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgPropertiesService::new(pool);

    let property = service
        .create_property(NewProperty {
            uuid: args.property_uuid.unwrap_or_default(),
            owner_uuid: args.owner_uuid,
            owner_name: args.owner_name,
            owner_contact: args.owner_contact,
            property_type: args.property_type,
            ad_type: args.ad_type,
            address: args.address,
            amount: args.amount,
            images: args.images,
            additional_info: args.additional_info,
        })
        .await
        .map_err(|error| format!("failed to create property: {error}"))?;

    println!("property_uuid: {}", property.uuid);
    println!("owner_uuid: {}", property.owner_uuid);
    println!("address: {}", property.address);

    Ok(())
}
