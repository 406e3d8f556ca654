//! Terminal views of the request state.
//!
//! Three mutually exclusive views: a loading line, an error line, or the data
//! table. No logic beyond choosing the view.

use crate::controller::RequestState;
use crate::geolocation::GeolocationRecord;

/// Renders the view for `state`.
pub fn render_state(state: &RequestState) -> String {
    match state {
        RequestState::Loading { ip } => format!("Loading {ip}..."),
        RequestState::Error(message) => format!("Error: {message}"),
        RequestState::Idle { record } | RequestState::Success(record) => render_table(record),
    }
}

fn render_table(record: &GeolocationRecord) -> String {
    let flag = record
        .has_flag()
        .then_some(("Flag:", record.country_flag_url.as_str()));
    let rows = [
        ("IP Address:", record.ip.as_str()),
        ("Continent:", record.continent_name.as_str()),
        ("Country:", record.country_name.as_str()),
    ]
    .into_iter()
    .chain(flag)
    .chain([
        ("State/Province:", record.state_province.as_str()),
        ("City:", record.city.as_str()),
        ("Latitude:", record.latitude.as_str()),
        ("Longitude:", record.longitude.as_str()),
        ("ISP:", record.isp.as_str()),
    ]);

    let mut out = String::from("IP Geolocation\n");
    for (label, value) in rows {
        out.push_str(&format!("{label:<16}{value}\n"));
    }
    out
}
