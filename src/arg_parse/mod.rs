use std::io::Error;

use crate::common::prelude::FetchStrategy;

#[derive(Clone)]
pub struct CmdArgs {
    pub bulk: bool,
    pub dry_run: bool,
    pub send_empty: bool,
}

impl CmdArgs {
    pub fn parse(args: Vec<String>) -> Result<Self, Error> {
        let mut bulk = false;
        let mut dry_run = false;
        let mut send_empty = false;
        {
            let mut ap = argparse::ArgumentParser::new();
            ap.set_description("Weekly AI news digest mailer");
            ap.refer(&mut bulk).add_option(
                &["-b", "--bulk"],
                argparse::StoreTrue,
                "Fetch a larger unfiltered page and filter titles locally",
            );
            ap.refer(&mut dry_run).add_option(
                &["-d", "--dry-run"],
                argparse::StoreTrue,
                "Print the digest to the console instead of emailing it",
            );
            ap.refer(&mut send_empty).add_option(
                &["-e", "--send-empty"],
                argparse::StoreTrue,
                "Deliver the digest even when no stories qualified",
            );

            match ap.parse(args, &mut std::io::stdout(), &mut std::io::stderr()) {
                Ok(()) => {}
                Err(_) => {
                    return Err(Error::from(std::io::ErrorKind::InvalidInput));
                }
            }
        }

        Ok(CmdArgs {
            bulk,
            dry_run,
            send_empty,
        })
    }

    #[must_use]
    pub fn get_strategy(&self) -> FetchStrategy {
        if self.bulk {
            FetchStrategy::Bulk
        } else {
            FetchStrategy::Query
        }
    }
}
