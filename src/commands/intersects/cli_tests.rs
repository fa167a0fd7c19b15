//! CLI parsing tests for intersects command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::types::{Aggregate, ResultType};
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "intersects",
        variant: Intersects,
        required_args: ["-c", "cells", "-g", "@track.geojson"],
        defaults: {
            common.collection: "cells",
            common.result_type: ResultType::Key,
            common.start: None,
            common.limit: None,
        },
    }

    crate::cli_option_test_with_required! {
        command: "intersects",
        variant: Intersects,
        required_args: ["-c", "cells", "-g", "{}"],
        test_name: test_with_result_type_max,
        args: ["-r", "MAX"],
        field: common.result_type,
        expected: ResultType::Aggregate(Aggregate::Max),
    }

    crate::cli_option_test_with_required! {
        command: "intersects",
        variant: Intersects,
        required_args: ["-c", "cells", "-g", "{}"],
        test_name: test_with_limit,
        args: ["-l", "100"],
        field: common.limit,
        expected: Some(100),
    }

    crate::cli_required_arg_test! {
        command: "intersects",
        test_name: test_requires_geometry,
        args: ["-c", "cells"],
        required_arg: "--geometry",
    }

    crate::cli_error_test! {
        command: "intersects",
        test_name: test_min_not_accepted,
        args: ["-c", "cells", "-g", "{}", "--min", "10"],
    }
}
