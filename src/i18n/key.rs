//! Message keys: one stable identifier per translatable piece of text.

use crate::i18n::I18nError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! message_keys {
    ($($key:ident),+ $(,)?) => {
        /// Identifier of one translatable message.
        ///
        /// Serialized by name, so locale tables are keyed by the variant
        /// name (`"ClassHierarchy"`). Unknown names fail to deserialize.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum MessageKey {
            $($key),+
        }

        impl MessageKey {
            /// Every key, in canonical order.
            pub const ALL: &'static [MessageKey] = &[$(MessageKey::$key),+];

            /// The key name as it appears in locale tables.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(MessageKey::$key => stringify!($key)),+
                }
            }
        }

        impl FromStr for MessageKey {
            type Err = I18nError;

            fn from_str(name: &str) -> Result<Self, Self::Err> {
                match name {
                    $(stringify!($key) => Ok(MessageKey::$key),)+
                    _ => Err(I18nError::UnknownKey(name.to_string())),
                }
            }
        }
    };
}

message_keys! {
    RelatedFunctions, RelatedSubscript, DetailedDescription,
    MemberTypedefDocumentation, MemberEnumerationDocumentation,
    MemberFunctionDocumentation, MemberDataDocumentation, More, ListOfAllMembers,
    MemberList, ThisIsTheListOfAllMembers, IncludingInheritedMembers,
    GeneratedAutomatically, EnumName, EnumValue, DefinedIn, Modules, ClassHierarchy,
    CompoundList, FileList, CompoundMembers, FileMembers, RelatedPages, FileSource,
    Examples, Search, ClassHierarchyDescription, FileListDescription,
    CompoundListDescription, CompoundMembersDescription, FileMembersDescription,
    FileSourceDescription, ExamplesDescription, RelatedPagesDescription,
    ModulesDescription, Concepts, ConceptDefinition, ConceptList,
    ConceptListDescription, Documentation, ModuleIndex, HierarchicalIndex,
    CompoundIndex, FileIndex, ModuleDocumentation, ClassDocumentation,
    ConceptDocumentation, FileDocumentation, ExampleDocumentation,
    PageDocumentation, ReferenceManual, Defines, PublicTypedefs, ProtectedTypedefs,
    PackageTypedefs, PrivateTypedefs, PublicTypes, ProtectedTypes, PackageTypes,
    PrivateTypes, Typedefs, Enumerations, Functions, Variables, EnumerationValues,
    DefineDocumentation, TypedefDocumentation, EnumerationTypeDocumentation,
    FunctionDocumentation, VariableDocumentation, Compounds, GeneratedAt,
    ClassDiagram, ForInternalUseOnly, Warning, Version, Date, Returns, SeeAlso,
    Parameters, Exceptions, GeneratedBy, NamespaceList, NamespacesListDescription,
    Friends, RelatedFunctionDocumentation, CompoundReference, FileReference,
    NamespaceReference, PublicMembers, PublicSignals, ProtectedSignals,
    PrivateSignals, StaticPublicMembers, ProtectedMembers, PublicSlots,
    ProtectedSlots, StaticProtectedMembers, PrivateMembers, PrivateSlots,
    StaticPrivateMembers, WriteList, InheritsList, InheritedByList,
    ReimplementedFromList, ReimplementedInList, NamespaceMembers,
    NamespaceMemberDescription, NamespaceIndex, NamespaceDocumentation, Namespaces,
    GeneratedFromFiles, ReturnValues, MainPage, PageAbbreviation,
    DefinedAtLineInSourceFile, DefinedInSourceFile, Deprecated,
    CollaborationDiagram, InclDepGraph, ConstructorDocumentation, GotoSourceCode,
    GotoDocumentation, Precondition, Postcondition, Invariant, InitialValue, Code,
    GraphicalHierarchy, GotoGraphicalHierarchy, GotoTextualHierarchy, PageIndex,
    Note, PublicAttribs, StaticPublicAttribs, ProtectedAttribs,
    StaticProtectedAttribs, PrivateAttribs, StaticPrivateAttribs, Todo, TodoList,
    ReferencedBy, Remarks, Attention, InclByDepGraph, Since, LegendTitle,
    LegendDocs, Legend, Test, TestList, Properties, PropertyDocumentation, Classes,
    Package, PackageList, PackagesListDescription, Packages, DefineValue, Bug,
    BugList, RtfAnsiCodepage, RtfCharSet, RtfGeneralIndex, Class, File, Namespace,
    Group, Page, Member, Global, Author, References, ImplementedFromList,
    ImplementedInList, RtfTableOfContents, DeprecatedList, Events,
    EventDocumentation, PackageMembers, StaticPackageMembers, PackageAttribs,
    StaticPackageAttribs, All, CallGraph, SearchResultsTitle, SearchResults,
    SearchMatches, SourceFile, DirIndex, DirDocumentation, Directories,
    DirDescription, DirReference, Dir, OverloadText, CallerGraph,
    EnumerationValueDocumentation, MemberFunctionDocumentationFortran,
    CompoundListFortran, CompoundMembersFortran, CompoundListDescriptionFortran,
    CompoundMembersDescriptionFortran, CompoundIndexFortran, TypeDocumentation,
    Subprograms, SubprogramDocumentation, DataTypes, ModulesList,
    ModulesListDescription, CompoundReferenceFortran, ModuleReference,
    ModuleMembers, ModulesMemberDescription, ModulesIndex, Module,
    GeneratedFromFilesFortran, Type, Subprogram, TypeConstraints, DirRelation,
    Loading, GlobalNamespace, Searching, NoMatches, FileIn, IncludesFileIn,
    CiteReferences, Copyright, DirDepGraph, DetailLevel, TemplateParameters,
    AndMore, EnumGeneratedFromFiles, EnumReference, InheritedFrom,
    AdditionalInheritedMembers, PanelSyncTooltip, ProvidedByCategory, ExtendsClass,
    ClassMethods, InstanceMethods, MethodDocumentation, Interfaces, Services,
    ConstantGroups, ConstantGroupReference, ServiceReference, SingletonReference,
    ServiceGeneratedFromFiles, SingletonGeneratedFromFiles, DateTime,
}

impl MessageKey {
    /// Keys that render a list of `@N` markers into their `{list}` slot.
    pub fn is_list(&self) -> bool {
        matches!(
            self,
            MessageKey::WriteList
                | MessageKey::InheritsList
                | MessageKey::InheritedByList
                | MessageKey::ReimplementedFromList
                | MessageKey::ReimplementedInList
                | MessageKey::ImplementedFromList
                | MessageKey::ImplementedInList
        )
    }

    /// Keys that name a kind of entity and inflect for case and number.
    pub fn is_word(&self) -> bool {
        matches!(
            self,
            MessageKey::Class
                | MessageKey::File
                | MessageKey::Namespace
                | MessageKey::Group
                | MessageKey::Page
                | MessageKey::Member
                | MessageKey::Global
                | MessageKey::Author
                | MessageKey::Dir
                | MessageKey::Module
                | MessageKey::Type
                | MessageKey::Subprogram
        )
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
