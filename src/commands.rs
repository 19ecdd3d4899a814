//! Subcommand handlers: validate arguments, wire clients, run a pipeline.

use tracing::info;

use crate::articles::{self, ArticleError, FetchJob, FetchReport, OutputMode, WikipediaClient};
use crate::cli::{ArticlesArgs, NamesArgs};
use crate::names::{self, SparqlClient};
use crate::settings::{self, ClientError};
use crate::{USER_AGENT, name_list};

pub async fn names(args: &NamesArgs) -> Result<(), ClientError> {
    let http = settings::build_client(USER_AGENT)?;
    let client = SparqlClient::new(http, settings::sparql_endpoint());

    for lang in &args.languages {
        names::process_language(&client, lang, &args.data_dir).await;
    }
    Ok(())
}

/// Validate everything up front; an invalid format aborts before any request or file.
pub async fn articles(args: &ArticlesArgs) -> Result<FetchReport, ArticleError> {
    let mode: OutputMode = args.output_format.parse()?;
    let city_names = name_list::read_names(&args.city_list)?;
    let job = FetchJob::new(
        city_names,
        mode,
        args.max_requests_per_second,
        &args.data_dir,
        args.n,
    )?
    .with_max_in_flight(args.max_in_flight);

    let user_agent = settings::project_user_agent(&args.project_name, &args.email);
    let http = settings::build_client(&user_agent)?;
    let client = WikipediaClient::new(http, settings::wikipedia_base(&args.lang));

    info!(list = %args.city_list.display(), count = job.names.len(), "city list loaded");
    Ok(articles::run(&client, &job).await)
}
