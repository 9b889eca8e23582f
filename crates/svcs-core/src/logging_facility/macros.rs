//! Canonical logging macros
//!
//! Callers must depend on `tracing` and `svcs-core-types`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use svcs_core::log_op_start;
/// log_op_start!("commit");
/// log_op_start!("track", path = "a.txt");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = svcs_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = svcs_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use svcs_core::log_op_end;
/// log_op_end!("commit", duration_ms = 42);
/// log_op_end!("commit", duration_ms = 42, outcome = "committed");
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = svcs_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = svcs_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// User errors are logged at `warn`, everything else at `error`.
///
/// # Example
///
/// ```
/// # use svcs_core::log_op_error;
/// use svcs_core::errors::SvcsError;
///
/// let err = SvcsError::CommitNotFound { fingerprint: "deadbeef".to_string() };
/// log_op_error!("checkout", err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {
        $crate::log_op_error!($op, $err, duration_ms = $duration,)
    };
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::ExError;
        let ex_err: ExError = $err.into();
        if ex_err.is_user_error() {
            tracing::warn!(
                component = module_path!(),
                op = $op,
                event = svcs_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        } else {
            tracing::error!(
                component = module_path!(),
                op = $op,
                event = svcs_core_types::schema::EVENT_END_ERROR,
                duration_ms = $duration,
                err_kind = ?ex_err.kind(),
                err_code = ex_err.code(),
                $($field)*
            );
        }
    }};
}
