use clap::Parser;

/// Calls Whereami.GetPayload on a remote server and prints the request
/// metadata, response metadata, and response payload for each call.
#[derive(Debug, Parser)]
#[command(name = "whereami-client", version)]
pub struct Args {
    /// Address of the Whereami gRPC server, e.g. localhost:50051
    pub server_address: String,

    /// Number of GetPayload calls to issue. Zero or a negative value
    /// issues no calls and exits successfully.
    #[arg(short, long, default_value_t = 1)]
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_defaults_to_one() {
        let args = Args::try_parse_from(["whereami-client", "localhost:50051"]).unwrap();
        assert_eq!(args.server_address, "localhost:50051");
        assert_eq!(args.count, 1);
    }

    #[test]
    fn count_accepts_short_and_long_flag() {
        let args = Args::try_parse_from(["whereami-client", "-c", "5", "localhost:50051"]).unwrap();
        assert_eq!(args.count, 5);

        let args =
            Args::try_parse_from(["whereami-client", "--count", "3", "localhost:50051"]).unwrap();
        assert_eq!(args.count, 3);
    }

    #[test]
    fn negative_count_is_accepted() {
        let args = Args::try_parse_from(["whereami-client", "localhost:50051", "--count=-2"])
            .unwrap();
        assert_eq!(args.count, -2);
    }

    #[test]
    fn server_address_is_required() {
        assert!(Args::try_parse_from(["whereami-client"]).is_err());
    }

    #[test]
    fn count_rejects_non_integers() {
        assert!(Args::try_parse_from(["whereami-client", "localhost:50051", "-c", "two"]).is_err());
    }
}
