//! Inno Setup script templates.
//!
//! Rendered with handlebars and HTML escaping disabled. Block helpers share a
//! line with other content so no line is treated as standalone and the emitted
//! whitespace is exactly what is written here. A backslash must never directly
//! precede `{{` (handlebars reads that as an escape), so backslashed paths are
//! passed in as values.

/// Main installer-definition template.
pub const ISS_TEMPLATE: &str = r#"
; Script generated by the Inno Setup Script Wizard.
; SEE THE DOCUMENTATION FOR DETAILS ON CREATING INNO SETUP SCRIPT FILES!

{{#each defines}}#define {{name}} "{{value}}"{{#unless @last}}
{{/unless}}{{/each}}

[Setup]
; NOTE: The value of AppId uniquely identifies this application.
; Do not use the same AppId value in installers for other applications.
; (To generate a new GUID, click Tools | Generate GUID inside the IDE.)
AppId={{app_id}}
AppName={#AppName}
AppVersion={#AppVersion}
;AppVerName={#AppName} {#AppVersion}
AppPublisher={#AppPublisher}
AppPublisherURL={#AppURL}
AppSupportURL={#AppURL}
AppUpdatesURL={#AppURL}
DefaultDirName={{setup_target}}
DefaultGroupName=Atom
OutputBaseFilename={#AppName}_{#AppVersion}
Compression=lzma
SolidCompression=yes
PrivilegesRequired=admin

[Languages]
Name: "english"; MessagesFile: "compiler:Default.isl"

[Tasks]
Name: "desktopicon"; Description: "{cm:CreateDesktopIcon}"; GroupDescription: "{cm:AdditionalIcons}"

[Files]
; Program Files
{{#each program_files}}{{> file_directive}}{{#unless @last}}
{{/unless}}{{/each}}

; Extern Files
{{#each extern_files}}{{> file_directive}}{{#unless @last}}
{{/unless}}{{/each}}

; NOTE: Don't use "Flags: ignoreversion" on any shared system files

; can not replace \ to /
[Icons]
Name: "{group}\{#AppName}"; Filename: "{app}\{#AppExeName}"
Name: "{commondesktop}\{#AppName}"; Filename: "{app}\{#AppExeName}"; Tasks: desktopicon

[Run]
Filename: "{app}\{#AppExeName}"; Description: "{cm:LaunchProgram,{#StringChange(AppName, '&', '&&')}}"; Flags: nowait postinstall skipifsilent
{{#if runtime}}{{> runtime_run}}{{/if}}

; copy a vcredist_x64.exe to install path first
[Code]
{{#if runtime}}{{> runtime_code}}{{/if}}
"#;

/// One `[Files]` entry.
pub const FILE_DIRECTIVE: &str = r#"Source: "{{source}}";{{#if excludes}} Excludes: "{{excludes}}";{{/if}} DestDir: "{{dest_dir}}"; Flags: {{flags}}"#;

/// `[Run]` entry installing the runtime redistributable when the check says so.
pub const RUNTIME_RUN: &str = r#"Filename: "{app}/{{runtime.installer}}"; Parameters:/q;WorkingDir:{tmp};Flags:skipifdoesntexist;StatusMsg:"Installing Runtime...";Check:NeedInstallVCRuntime"#;

/// `[Code]` section probing the uninstall registry for the runtime.
pub const RUNTIME_CODE: &str = r#"
var NeedVcRuntime: Boolean;

function NeedInstallVCRuntime(): Boolean;
begin
  Result := NeedVcRuntime;
end;

function InitializeSetup(): Boolean;
var version: Cardinal;
begin
  if RegQueryDWordValue(HKLM, '{{runtime.registry_path}}', 'Version', version) = false then begin
    NeedVcRuntime := true;
  end;
  Result := true;
end;
"#;
