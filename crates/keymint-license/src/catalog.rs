//! Built-in product catalog.
//!
//! Configuration data, not logic: the descriptor builder never reads
//! this table itself. Callers (the CLI, for one) pass it in when no
//! explicit code list is given, and may substitute any other non-empty
//! list.

/// Default product SKU codes: the IDE family first, then plugin codes.
pub const DEFAULT_PRODUCT_CODES: &[&str] = &[
    "II", "PS", "AC", "DB", "RM", "WS", "RD", "CL", "PC", "GO", "DS", "DC", "DPN", "DM",
    "PSYMFONYPLUGIN", "PWLANG", "PSWPLUGIN", "PGITTOOLBOX", "PHYBRISCOMMERCE", "PMATERIALUI",
    "PSEQUENCEDIAGRA", "PJETFORCER", "PAEMIDE", "PRNCONSOLE", "PANSIHIGHLIGHT", "PYAOQIANGBPMN",
    "PAEM", "PRAINBOWBRACKET", "PGITSCOPE", "PVLOG", "PCODEMRBASE", "PJDCLEANREAD", "PBRWJV",
    "PDB", "PEXTRAICONS", "PBISJ", "PSCIPIO", "PBISAA", "PZENUML", "PJFORMDESIGNER", "PORCHIDE",
    "PIEDIS", "PCMAKEPLUS", "POPENAPI", "PBETTERHIGHLIGH", "PATOMONEDARK", "PGDOC", "POFFICEFLOOR",
    "PWIFIADB", "PLARAVEL", "PODOO", "PCREVIEW", "PMRINTEGEE", "PSFCC", "PMINBATIS",
    "PPOJOTOJSONSCH", "PRDFANDSPARQL", "PBASHSUPPORTPRO", "PMYBATISLOG", "PSMARTJUMP",
    "PJAVACODESUGG", "PGOLANGCODESUGG", "PRUBYCODESUGG", "PVCS", "PJSCODESUGG", "PPHPCODESUGG",
    "PSVERILOG", "PSPARQL", "PTOOLSET", "PJSONTOTS", "PQMLEDITOR", "PSTRKER", "PELASTICSEARCH",
    "PVISUALGC", "PPYCODESUGG", "PFLUTTER", "PRESTKIT", "PAWSLAMBDADEPLR", "PPUMLSTUDIO", "PCWMP",
    "PFIREHIGHLIGHT", "PJPASQL", "PGODRUNNER", "PLEDGER", "PREGEXTOOL", "PAPH", "PGITLABCI",
    "PCIRCLECI", "PHEROKU", "PREDISMANAGER", "PZEROCODE", "PSTORMSECTIONS", "PSENTRYINTEG",
    "PREDISTOOLS", "PFUZYFIPC", "PBITRISECI", "PQTSQSSEDITOR", "PAPPLETRUNNER", "PDATABASE",
    "PHPEAPLUGIN", "PLEP", "PHPBUILDER", "PMATERIALHC", "PCDMQTTCLIENT", "PISCRATCH", "PRSMGNL",
    "PCAPELASTIC", "PASTOCK", "PCAPREDIS", "PBEANCONVERTER", "PELSA", "PDJANGOTPLPEP",
    "PQUERYFLAG", "PNGINX", "PKSEXPLORER", "PZKA", "PCDAPIRUNNER", "PNEONPRO", "PMBCODEHELPPRO",
    "PCODEREFACTORAI", "PXSDVISUALIZER", "PSPRINGBOOTIDEA", "PEXCELEDITOR", "PGITLAB",
    "PYAPIQUICKTYPE", "PTERMINAL", "PWIREMOCHA", "PDYNAMODB", "PFASTSHELL", "PJSONNETEMLSUP",
    "PPHPHOUDINI", "POXYXSDJSONSCH", "PQUARKUSHELPER", "PWGCODECREATOR", "PCIINTG",
    "PDBDATABASETOOL", "PNGROK", "PKARATE", "PMATERIALEXTRAS", "PJSONTOANYLANGU",
    "PMATERIALCUSTOM", "PMATERIALLANG", "PMATERIALFRAME", "PRANCHER", "PREDISCLIHELPER",
    "PSCREENCODEPRO", "PCODEKITS", "PREDISS", "PAWSQLADVISOR", "PLATTEPRO", "PGERRYTHEMESPRO",
    "PUNIAPPSUPPORT", "POPENAPICRUDWIZ", "PGOPARSER", "PNEXTSKETCH", "PNETLIFY",
    "PGERRYCYBERPUNK", "PTLDRAI", "PBREWBUNDLE", "PGERRYSPACE", "PKAFKAIDE", "PGITHUBCI",
    "PGERRYNATURE", "PEXTENSION", "PSKOL", "PGERRYCHERRY", "PGERRYCOFFEE", "PCONNECTUI",
    "POXYJSONCONVERT", "PDOYTOWIN", "PGERRYAURORA", "PWXUFQYRHZCRSEO", "PWAUFKYVHQCRXEO",
    "PSQLFLUFFLINTER", "PMAGE", "PTAILWINDTOOLS", "PTRAVISCI", "PMONGOEXPERT", "PNEXTSKETCHTWO",
    "PWXUQQYVOXCRSEO", "PBUILDMON", "PJETCLIENT", "PAICODING", "PCAICOMMITAPP", "PCHATGPTCODING",
    "POLYBPMNGDNEXT", "PARMADILLO", "PVERILOGLANGUAG", "PNOSQLNAVMDB", "PCUEFY",
    "PCOMPOSEHAMMER", "PGPTASSISTANT", "PDTOBUDDY", "PNPMPACKAGEJSON", "PAZURECODING",
    "PGITLABCICD", "PSENTRY", "PKAFKA", "PSRCODEGEN", "PSOURCESYNCPRO", "PAZD",
    "PWXUQRYTOXCRSEO", "PPOLARISTOMCATS", "PMYBATISFIELDAD", "PIMAGETOVECTOR", "PDATAGRAPH",
    "POXYJSONSCHGEN", "PSPEECHTOTEXT", "PMYSQLPROXY", "PFASTREQUEST", "PMYBATISHELPER",
    "PREDIS",
];
