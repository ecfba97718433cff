// All LLM prompt constants for the extraction module.
// The schema skeleton is a prompt convention, not a guarantee — the parse
// boundary in models/profile.rs defaults every missing key.

/// System prompt for CV structuring — enforces JSON-only output.
pub const EXTRACTION_SYSTEM: &str = "Du bist ein Experte für das Extrahieren \
    und Strukturieren von Lebenslauf-Daten. Gib immer valides JSON zurück.";

/// CV structuring prompt template. Replace `{cv_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extrahiere und strukturiere den folgenden Lebenslauf-Text in ein JSON-Format.
Gib NUR valides JSON mit dieser exakten Struktur zurück:

{
    "personal": {
        "name": "Vollständiger Name",
        "city": "Stadt",
        "address": "Vollständige Adresse",
        "email": "E-Mail-Adresse",
        "phone": "Telefonnummer",
        "linkedin": "LinkedIn-Profil",
        "summary": "Professionelle Zusammenfassung oder Zielsetzung"
    },
    "experience": [
        {
            "position": "Jobtitel",
            "company": "Firmenname",
            "start_date": "MM/YYYY",
            "end_date": "MM/YYYY oder Heute",
            "tasks": ["Aufgabe oder Erfolg als Stichpunkt"]
        }
    ],
    "education": [
        {
            "degree": "Abschlussname",
            "institution": "Universität/Schule",
            "start_date": "MM/YYYY",
            "end_date": "MM/YYYY",
            "description": "Zusätzliche Details"
        }
    ],
    "skills": [
        "Fähigkeit 1", "Fähigkeit 2", "Fähigkeit 3"
    ],
    "certifications": [
        {
            "name": "Zertifikatsname",
            "issuer": "Ausstellende Organisation",
            "date": "MM/YYYY"
        }
    ],
    "languages": [
        {
            "name": "Sprache",
            "level": "A1, A2, B1, B2, C1, C2 oder Muttersprache"
        }
    ]
}

Wenn ein Feld nicht gefunden wird, verwende null oder ein leeres Array/String.
Extrahiere Daten im Format MM/YYYY.
Extrahiere die Stadt separat aus der Adresse ins 'city' Feld.

CV Text:
{cv_text}"#;
