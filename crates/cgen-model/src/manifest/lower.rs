//! Replays manifest entries through the model builders.

use log::trace;

use crate::config::Config;
use crate::ctype::{CSpec, CType};
use crate::decl::Decl;
use crate::spec::{
    DefineSpec, EnumBuilder, EnumSpec, FunctionSpec, PlainSpec, StructSpec, TypedefSpec,
    VoidSpec,
};
use crate::unit::TranslationUnit;
use crate::value::Value;
use crate::{Error, Result};

use super::raw::{RawDecl, RawManifest, RawMember, RawType, parse_manifest};

/// Parse and lower manifest JSON in one go.
pub fn load(json: &str, config: &Config) -> Result<TranslationUnit> {
    let manifest = parse_manifest(json)?;
    lower(manifest, config)
}

/// Build a translation unit from parsed manifest entries, in order.
///
/// Tag references resolve against definitions seen earlier in the manifest;
/// each reference receives its own copy of the definition.
pub fn lower(manifest: RawManifest, config: &Config) -> Result<TranslationUnit> {
    let mut lowerer = Lowerer {
        config,
        unit: TranslationUnit::new(),
    };
    for raw in manifest.declarations {
        let decl = lowerer.lower_top_level(raw)?;
        lowerer.unit.push(decl);
    }
    Ok(lowerer.unit)
}

struct Lowerer<'a> {
    config: &'a Config,
    unit: TranslationUnit,
}

impl Lowerer<'_> {
    fn lower_top_level(&mut self, raw: RawDecl) -> Result<Decl> {
        let mut decl = self.lower_decl(raw)?;
        if decl.is_typedef && !decl.name.is_empty() {
            self.record_typedef(&mut decl);
        }
        trace!("lowered `{}` as {}", decl.name, decl.kind());
        Ok(decl)
    }

    fn lower_decl(&mut self, raw: RawDecl) -> Result<Decl> {
        let RawDecl {
            name,
            ty,
            pointers,
            arrays,
            is_const,
            is_static,
            is_typedef,
            is_define,
            value,
            expression,
            pos,
            src,
        } = raw;

        let mut spec = self.lower_type(ty, &name, value.as_ref())?;
        if pointers > 0 {
            spec.set_pointer_depth(pointers);
        }
        for size in arrays {
            spec.append_array_dimension(size);
        }
        if is_const {
            spec.set_const(true);
        }

        Ok(Decl {
            spec,
            name,
            value,
            expression,
            is_static,
            is_typedef,
            is_define,
            pos,
            src,
        })
    }

    fn lower_type(&mut self, ty: RawType, name: &str, value: Option<&Value>) -> Result<CSpec> {
        match ty {
            RawType::Plain {
                base,
                unsigned,
                signed,
                short,
                long,
            } => {
                let modified = unsigned || signed || short || long > 0;
                if base == "void" && !modified {
                    return Ok(VoidSpec::new().into());
                }
                if base.is_empty() || long > 2 {
                    return Err(Error::InvalidPlain { base });
                }
                Ok(PlainSpec::new(base)
                    .unsigned(unsigned)
                    .signed(signed)
                    .short(short)
                    .longs(long)
                    .into())
            }
            RawType::Void => Ok(VoidSpec::new().into()),
            RawType::Struct { tag, fields, union } => {
                self.lower_struct(tag, fields.unwrap_or_default(), union)
            }
            RawType::Enum { tag, members } => Ok(self.lower_enum(tag, members.unwrap_or_default())),
            RawType::Function {
                name: func_name,
                ret,
                ret_pointers,
                params,
                variadic,
            } => {
                let mut ret = match ret {
                    Some(ty) => self.lower_type(*ty, "", None)?,
                    None => VoidSpec::new().into(),
                };
                if ret_pointers > 0 {
                    ret.set_pointer_depth(ret_pointers);
                }
                let func_name = if func_name.is_empty() {
                    name.to_string()
                } else {
                    func_name
                };
                let mut spec = FunctionSpec::new(func_name, ret);
                for param in params {
                    spec.push_param(self.lower_decl(param)?);
                }
                spec.set_variadic(variadic);
                Ok(spec.into())
            }
            RawType::Named { name } => self
                .unit
                .lookup_alias(&name)
                .ok_or(Error::UnknownType { name }),
            RawType::Define => match value {
                Some(value) => Ok(DefineSpec::from_value(value).into()),
                None => Err(Error::MissingDefineValue {
                    name: name.to_string(),
                }),
            },
        }
    }

    fn lower_struct(&mut self, tag: String, fields: Vec<RawDecl>, is_union: bool) -> Result<CSpec> {
        let keyword = if is_union { "union" } else { "struct" };
        if fields.is_empty() {
            return Ok(self
                .unit
                .lookup_tag(keyword, &tag)
                .unwrap_or_else(|| StructSpec::opaque(tag, is_union).into()));
        }

        let fields = fields
            .into_iter()
            .map(|field| self.lower_decl(field))
            .collect::<Result<Vec<_>>>()?;
        let spec = CSpec::from(StructSpec::new(tag, is_union, fields));
        self.unit.register_tag(&spec);
        Ok(spec)
    }

    fn lower_enum(&mut self, tag: String, members: Vec<RawMember>) -> CSpec {
        if members.is_empty() {
            return self
                .unit
                .lookup_tag("enum", &tag)
                .unwrap_or_else(|| EnumSpec::opaque(tag).into());
        }

        let mut builder = EnumBuilder::with_config(tag, self.config);
        for member in members {
            let mut decl = Decl::enumerator(member.name, member.value, member.expression);
            decl.pos = member.pos;
            builder.push_member(decl);
        }
        let (spec, diagnostics) = builder.freeze();
        self.unit.diagnostics_mut().extend(diagnostics);

        let spec = CSpec::from(spec);
        self.unit.register_tag(&spec);
        spec
    }

    /// Undecorated, unqualified aggregates take the alias as their canonical
    /// name; anything else is wrapped in a `TypedefSpec`.
    fn record_typedef(&mut self, decl: &mut Decl) {
        let alias = decl.name.clone();
        let foldable = matches!(decl.spec, CSpec::Enum(_) | CSpec::Struct(_))
            && decl.spec.decoration().is_bare()
            && !decl.spec.is_const();

        if !foldable {
            let target = decl.spec.clone_value();
            self.unit
                .register_alias(alias.clone(), TypedefSpec::new(alias, target).into());
            return;
        }

        decl.spec.set_canonical_name(&alias);
        if let Some(keyword) = decl.spec.kind().tag_prefix() {
            let tag = decl.spec.tag().to_string();
            if !tag.is_empty() {
                self.unit.name_tag(keyword, &tag, &alias);
            }
        }
        self.unit.register_alias(alias, decl.spec.clone_value());
    }
}
