//! Reservations command

use anyhow::Result;
use clap::Parser;
use lightbnb_db::{Database, DEFAULT_LIMIT};

use super::print_json;

#[derive(Parser, Debug)]
#[command(about = "List a guest's completed reservations, oldest first")]
pub struct ReservationsArgs {
    /// Guest (user) id
    #[arg(long)]
    pub guest: i32,

    /// Maximum number of reservations
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    pub limit: i64,
}

pub async fn run(db: &Database, args: ReservationsArgs) -> Result<()> {
    let stays = db
        .reservations()
        .list_for_guest(args.guest, args.limit)
        .await?;
    print_json(&stays)
}
