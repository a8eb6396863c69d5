/// Usage text sent for an empty command or `help`.
pub fn help_text(
    prefix: &str,
    reference_label: &str,
) -> String {
    format!(
        "This bot looks for eateries within a mile of {reference_label}.\n\
All queries to this bot must start with \"{prefix}\", followed by any of these arguments:\n\
\n\
- help: brings up this help text, also shown when {prefix} is sent without arguments\n\
- find: (restaurant name): locates a restaurant and returns its name, address, \
phone number, approximate distance from {reference_label}, and whether it is currently open. \
Only shows a result if all of that information is available.\n\
\n\
One or more of the following:\n\
- category(s): limit the search to a type of eatery. Several categories can be given \
as a comma-delimited list with no spaces (ex. chinese,noodles)\n\
- n1-n10: show 1-10 eateries, default is 5\n\
- r0-r5: only show eateries rated at least this high, in steps of 0.5 (ex. r4.5), default is 3.5\n\
- p1-p4: only show eateries at or below this price level, 1 being the cheapest, default is 2"
    )
}
