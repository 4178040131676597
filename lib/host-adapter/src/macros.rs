/// Checks whether the running OS meets per-family minimum versions.
///
/// Families that are not listed count as lacking the facility.
///
/// ```
/// use wasi_host_adapter::available;
///
/// if available!(macos(10, 13, 0), ios(11, 0, 0), tvos(11, 0, 0), watchos(4, 0, 0), linux(2, 6, 22)) {
///     // futimens(2) is safe to call here.
/// }
/// ```
#[macro_export]
macro_rules! available {
    ($($family:ident($major:expr, $minor:expr, $patch:expr)),+ $(,)?) => {
        $crate::availability::is_available(
            &$crate::availability::Requirement::new()$(.$family($major, $minor, $patch))+
        )
    };
}
