// The two fixed template skeletons. Slots are filled by `render` via
// placeholder substitution; section fragments are built in Rust so that an
// empty section disappears entirely instead of leaving a bare heading.

/// "Modern" layout: two-zone header with the logo at the top, a profile band
/// for summary and optional contact person, bulleted task lists.
pub const MODERN_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Profil - {name}</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Arial', sans-serif;
            line-height: 1.6;
            color: #333;
            background: #f8f9fa;
        }
        .profile-container {
            max-width: 210mm;
            margin: 0 auto;
            background: white;
            box-shadow: 0 0 20px rgba(0,0,0,0.1);
            min-height: 297mm;
        }
        .header {
            background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);
            color: white;
            padding: 40px;
            text-align: center;
        }
        .company-logo { max-height: 60px; margin-bottom: 20px; }
        .header h1 { font-size: 2.5em; margin-bottom: 10px; font-weight: 300; }
        .header .subtitle { font-size: 1.2em; opacity: 0.9; }
        .profile-band {
            background: #f8f9fa;
            padding: 25px 40px;
            border-bottom: 3px solid {primary};
        }
        .profile-band .summary { font-style: italic; line-height: 1.6; }
        .contact-person {
            margin-top: 15px;
            padding-top: 15px;
            border-top: 1px solid #dee2e6;
            color: #555;
            font-size: 0.95em;
        }
        .contact-person .contact-name { font-weight: 600; color: {primary}; }
        .main-content { padding: 40px; }
        .section { margin-bottom: 40px; }
        .section-title {
            color: {primary};
            font-size: 1.4em;
            margin-bottom: 20px;
            padding-bottom: 10px;
            border-bottom: 2px solid {primary};
            font-weight: 600;
        }
        .experience-item, .education-item {
            margin-bottom: 25px;
            padding-left: 20px;
            border-left: 3px solid {primary};
        }
        .item-header {
            display: flex;
            justify-content: space-between;
            align-items: flex-start;
            margin-bottom: 10px;
            flex-wrap: wrap;
        }
        .item-title { font-weight: 600; color: #2c3e50; font-size: 1.1em; }
        .item-company { color: {primary}; font-weight: 500; }
        .item-dates { color: #666; font-size: 0.9em; white-space: nowrap; }
        .item-description { color: #555; line-height: 1.5; }
        .task-list { margin: 5px 0 0 20px; color: #555; }
        .task-list li { margin-bottom: 4px; }
        .skills-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
        }
        .skill-item {
            background: #f8f9fa;
            padding: 10px 15px;
            border-radius: 5px;
            border-left: 4px solid {primary};
        }
        .certification-item {
            display: flex;
            justify-content: space-between;
            align-items: center;
            padding: 10px 0;
            border-bottom: 1px solid #eee;
        }
        .certification-item:last-child { border-bottom: none; }
        .cert-name { font-weight: 500; color: #2c3e50; }
        .cert-issuer, .cert-date { color: #666; font-size: 0.9em; }
        .language-item { padding: 6px 0; color: #555; }
        @media print {
            body { background: white; }
            .profile-container { box-shadow: none; }
        }
    </style>
</head>
<body>
    <div class="profile-container">
        <div class="header">
            {logo_block}
            <h1>{name}</h1>
            {position_block}
        </div>
        {profile_band}
        <div class="main-content">
{sections}
        </div>
    </div>
</body>
</html>
"#;

/// "Classic" layout: letter-style single column with an info grid of
/// city / birth year / position and numbered sections.
pub const CLASSIC_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Profil - {name}</title>
    <style>
        * { margin: 0; padding: 0; box-sizing: border-box; }
        body {
            font-family: 'Georgia', serif;
            line-height: 1.7;
            color: #222;
            background: white;
        }
        .letter {
            max-width: 210mm;
            margin: 0 auto;
            padding: 50px 60px;
            min-height: 297mm;
        }
        .letter-head {
            border-bottom: 3px double {primary};
            padding-bottom: 20px;
            margin-bottom: 30px;
        }
        .letter-head h1 {
            font-size: 2.2em;
            font-weight: normal;
            color: {primary};
            letter-spacing: 1px;
        }
        .company-logo { max-height: 50px; float: right; }
        .info-grid {
            display: grid;
            grid-template-columns: repeat(3, 1fr);
            gap: 10px;
            margin: 20px 0 35px 0;
            padding: 15px;
            background: #fafafa;
            border: 1px solid #e5e5e5;
        }
        .info-cell .info-label {
            font-size: 0.8em;
            text-transform: uppercase;
            letter-spacing: 1px;
            color: #888;
        }
        .info-cell .info-value { color: #222; }
        .section { margin-bottom: 35px; }
        .section-title {
            font-size: 1.2em;
            color: {primary};
            border-bottom: 1px solid {secondary};
            padding-bottom: 6px;
            margin-bottom: 16px;
        }
        .experience-item, .education-item { margin-bottom: 20px; }
        .item-title { font-weight: bold; }
        .item-company { font-style: italic; color: #444; }
        .item-dates { color: #777; font-size: 0.9em; }
        .item-description { margin-top: 6px; color: #444; }
        .task-list { margin: 6px 0 0 22px; color: #444; }
        .summary {
            font-style: italic;
            color: #444;
            margin-bottom: 35px;
        }
        .contact-person { margin-top: 10px; color: #555; font-size: 0.95em; }
        .skill-item, .language-item, .certification-item { padding: 3px 0; }
        .cert-name { font-weight: bold; }
        @media print { .letter { padding: 0; } }
    </style>
</head>
<body>
    <div class="letter">
        <div class="letter-head">
            {logo_block}
            <h1>{name}</h1>
        </div>
        {info_grid}
        {summary_block}
{sections}
    </div>
</body>
</html>
"#;
