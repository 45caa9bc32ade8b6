//! Event type hosts and the "ignore for availability" flag.
//!
//! A host with `ignore_for_availability` set still gets every invite
//! for the event type but their busy time doesn't remove slots.

pub mod db;
pub mod models;

pub use db::*;
pub use models::*;

/// Hosts whose calendars block availability.
pub fn availability_hosts(hosts: &[Host]) -> Vec<&Host> {
    hosts
        .iter()
        .filter(|h| !h.ignore_for_availability)
        .collect()
}

/// Hosts who are added to the booking's invite.
pub fn invite_hosts(hosts: &[Host]) -> Vec<&Host> {
    hosts.iter().collect()
}

pub fn hosts_for_purpose(hosts: &[Host], purpose: HostPurpose) -> Vec<&Host> {
    match purpose {
        HostPurpose::All => hosts.iter().collect(),
        HostPurpose::Availability => availability_hosts(hosts),
        HostPurpose::Invites => invite_hosts(hosts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(user_id: i64, ignore_for_availability: bool) -> Host {
        Host {
            id: user_id,
            event_type_id: 1,
            user_id,
            email: format!("host{}@x.com", user_id),
            name: format!("Host {}", user_id),
            ignore_for_availability,
        }
    }

    #[test]
    fn it_excludes_flagged_hosts_from_availability() {
        let hosts = vec![host(1, false), host(2, true), host(3, false)];
        let ids: Vec<i64> = availability_hosts(&hosts).iter().map(|h| h.user_id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn it_invites_flagged_hosts() {
        let hosts = vec![host(1, false), host(2, true)];
        let ids: Vec<i64> = invite_hosts(&hosts).iter().map(|h| h.user_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn it_can_leave_no_availability_hosts() {
        let hosts = vec![host(1, true)];
        assert!(hosts_for_purpose(&hosts, HostPurpose::Availability).is_empty());
        assert_eq!(hosts_for_purpose(&hosts, HostPurpose::All).len(), 1);
    }
}
