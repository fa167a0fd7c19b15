//! CLI parsing tests for schema command using the test DSL.

#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use clap::Parser;
    use rstest::rstest;

    crate::cli_defaults_test! {
        command: "schema",
        variant: Schema,
        required_args: [],
        defaults: {
            fields: false,
        },
    }

    crate::cli_option_test! {
        command: "schema",
        variant: Schema,
        test_name: test_with_fields,
        args: ["--fields"],
        field: fields,
        expected: true,
    }

    crate::cli_error_test! {
        command: "schema",
        test_name: test_collection_not_accepted,
        args: ["--collection", "worldclim"],
    }
}
