//! Static, company-keyed contact directories. The editing layer lets a user
//! attach one named contact person to the export.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactPerson {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

pub const GALDORA_CONTACTS: &[ContactPerson] = &[
    ContactPerson {
        id: "galdora_1",
        name: "Alessandro Boehm",
        role: "Recruiter",
        email: "boehm@galdora.de",
        phone: "01261 6212600",
    },
    ContactPerson {
        id: "galdora_2",
        name: "Kai Fischer",
        role: "Teamleitung Recruiting",
        email: "fischer@galdora.de",
        phone: "01261 6212601",
    },
    ContactPerson {
        id: "galdora_3",
        name: "Konrad Rusczyk",
        role: "Recruiter",
        email: "konrad@galdora.de",
        phone: "01261 6212600",
    },
    ContactPerson {
        id: "galdora_4",
        name: "Melike Demirkol",
        role: "Recruiter",
        email: "demirkol@galdora.de",
        phone: "01261 6212600",
    },
    ContactPerson {
        id: "galdora_5",
        name: "Salim Alizai",
        role: "Geschäftsführung",
        email: "gf@galdora.de",
        phone: "01261 6212600",
    },
];

pub const BEJOB_CONTACTS: &[ContactPerson] = &[
    ContactPerson {
        id: "bejob_1",
        name: "Lisa Hoffmann",
        role: "Head of Recruiting",
        email: "l.hoffmann@bejob.de",
        phone: "+49 30 9876 5401",
    },
    ContactPerson {
        id: "bejob_2",
        name: "Markus Klein",
        role: "Senior Recruiter",
        email: "m.klein@bejob.de",
        phone: "+49 30 9876 5402",
    },
    ContactPerson {
        id: "bejob_3",
        name: "Julia Schneider",
        role: "Talent Manager",
        email: "j.schneider@bejob.de",
        phone: "+49 30 9876 5403",
    },
    ContactPerson {
        id: "bejob_4",
        name: "Stefan Wagner",
        role: "HR Consultant",
        email: "s.wagner@bejob.de",
        phone: "+49 30 9876 5404",
    },
];

/// Contacts for a company key; unknown keys get the default company's list.
pub fn contacts_for(company_key: &str) -> &'static [ContactPerson] {
    match company_key.to_lowercase().as_str() {
        "bejob" => BEJOB_CONTACTS,
        _ => GALDORA_CONTACTS,
    }
}

/// Finds a contact by id within a company's directory.
pub fn contact_by_id(company_key: &str, id: &str) -> Option<&'static ContactPerson> {
    contacts_for(company_key).iter().find(|c| c.id == id)
}
