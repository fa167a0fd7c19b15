//! CLI parsing tests for distance command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::types::{Aggregate, ResultType, Sort};
    use clap::Parser;
    use rstest::rstest;

    // =========================================================================
    // Macro-generated tests (standard patterns)
    // =========================================================================

    crate::cli_defaults_test! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", r#"{"type":"Point","coordinates":[10,45]}"#],
        defaults: {
            common.collection: "worldclim",
            common.result_type: ResultType::Key,
            common.start: None,
            common.limit: None,
            common.no_limit: false,
            min: None,
            max: None,
            sort: Sort::No,
        },
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_min,
        args: ["--min", "1000"],
        field: min,
        expected: Some(1000.0),
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_max,
        args: ["--max", "5000.5"],
        field: max,
        expected: Some(5000.5),
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_sort_desc,
        args: ["--sort", "DESC"],
        field: sort,
        expected: Sort::Desc,
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_sort_short_lowercase,
        args: ["-s", "asc"],
        field: sort,
        expected: Sort::Asc,
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_result_type,
        args: ["-r", "STD"],
        field: common.result_type,
        expected: ResultType::Aggregate(Aggregate::Std),
    }

    crate::cli_option_test_with_required! {
        command: "distance",
        variant: Distance,
        required_args: ["-c", "worldclim", "-g", "{}"],
        test_name: test_with_paging,
        args: ["--start", "20", "--limit", "5"],
        field: common.limit,
        expected: Some(5),
    }

    crate::cli_required_arg_test! {
        command: "distance",
        test_name: test_requires_collection,
        args: ["-g", "{}"],
        required_arg: "--collection",
    }

    crate::cli_required_arg_test! {
        command: "distance",
        test_name: test_requires_geometry,
        args: ["-c", "worldclim"],
        required_arg: "--geometry",
    }

    crate::cli_error_test! {
        command: "distance",
        test_name: test_unknown_sort_rejected,
        args: ["-c", "worldclim", "-g", "{}", "--sort", "SIDEWAYS"],
    }

    crate::cli_error_test! {
        command: "distance",
        test_name: test_unknown_result_type_rejected,
        args: ["-c", "worldclim", "-g", "{}", "-r", "MEDIAN"],
    }

    crate::cli_error_test! {
        command: "distance",
        test_name: test_non_numeric_max_rejected,
        args: ["-c", "worldclim", "-g", "{}", "--max", "far"],
    }

    crate::cli_error_test! {
        command: "distance",
        test_name: test_limit_conflicts_with_no_limit,
        args: ["-c", "worldclim", "-g", "{}", "--limit", "5", "--no-limit"],
    }
}
