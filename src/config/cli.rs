use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "auto-tools")]
#[command(about = "Message templates, delivery estimates, and pay rates for auto transport reps")]
pub struct CliConfig {
    /// Template to render (e.g. main_sms); omit to skip message generation
    #[arg(long)]
    pub template: Option<String>,

    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Year, make and model, e.g. "2019 Honda Civic"
    #[arg(long, default_value = "")]
    pub car: String,

    /// Quoted total price without the dollar sign
    #[arg(long, default_value = "")]
    pub total_price: String,

    /// Route distance for the delivery estimate
    #[arg(long)]
    pub miles: Option<String>,

    /// Carrier pay for the per-mile rate
    #[arg(long)]
    pub pay: Option<String>,

    /// TOML file replacing the built-in template set
    #[arg(long)]
    pub templates: Option<String>,

    /// List available template names and exit
    #[arg(long)]
    pub list_templates: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
