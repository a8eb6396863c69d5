use clap::Parser;

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long)]
    pub environment: String,

    #[clap(env, long)]
    pub yelp_api_key: String,

    #[clap(env, long, default_value = "https://api.yelp.com/v3")]
    pub yelp_api_url: String,

    /// Free-text address every search is anchored to.
    #[clap(env, long, default_value = "1 Washington Sq, San Jose, CA 95192")]
    pub search_location: String,

    /// Short name of the search location, shown in detail replies.
    #[clap(env, long, default_value = "SJSU")]
    pub reference_label: String,

    #[clap(env, long, default_value = "$sjsufood")]
    pub command_prefix: String,

    /// Messages authored by this id are never answered.
    #[clap(env, long)]
    pub bot_user_id: Option<String>,

    #[clap(env, long, default_value_t = 3000)]
    pub port: u16,
}
