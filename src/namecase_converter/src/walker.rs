use namecase_core::{CasingRules, Client, EnumMember, Model, Operation, OperationResponse, Service};
use tracing::{debug, trace};

/// A node of the client IR whose identifiers can be renamed.
///
/// Conversion never mutates the node; it returns a copy that differs only in
/// the renamed identifiers. Sequence order is kept everywhere, since emitters
/// write fields and members in IR order.
pub trait ConvertCase {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized;
}

impl ConvertCase for Model {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        let Model {
            name,
            export,
            ty,
            base,
            template,
            link,
            description,
            is_definition,
            is_read_only,
            is_required,
            is_nullable,
            imports,
            enum_members,
            enums,
            properties,
            extra,
        } = self;

        // Interfaces are referenced by their original name elsewhere in the
        // generated client.
        let converted_name = if self.is_interface() {
            name.clone()
        } else {
            rules.to_model_name_case(name)
        };

        if &converted_name != name {
            trace!(from = %name, to = %converted_name, "renamed model");
        }

        Model {
            name: converted_name,
            export: *export,
            ty: ty.clone(),
            base: base.clone(),
            template: template.clone(),
            link: link.as_ref().map(|link| Box::new(link.convert_case(rules))),
            description: description.clone(),
            is_definition: *is_definition,
            is_read_only: *is_read_only,
            is_required: *is_required,
            is_nullable: *is_nullable,
            imports: imports.clone(),
            enum_members: enum_members
                .iter()
                .map(|member| member.convert_case(rules))
                .collect(),
            enums: enums.iter().map(|model| model.convert_case(rules)).collect(),
            properties: properties
                .iter()
                .map(|property| property.convert_case(rules))
                .collect(),
            extra: extra.clone(),
        }
    }
}

impl ConvertCase for EnumMember {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        let name = rules.to_enum_member_case(&self.name);

        if name != self.name {
            trace!(from = %self.name, to = %name, "renamed enum member");
        }

        EnumMember {
            name,
            value: self.value.clone(),
            ty: self.ty.clone(),
            description: self.description.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl ConvertCase for OperationResponse {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        OperationResponse {
            location: self.location,
            code: self.code,
            model: self.model.convert_case(rules),
        }
    }
}

impl ConvertCase for Operation {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        let Operation {
            service,
            name,
            summary,
            description,
            deprecated,
            method,
            path,
            parameters,
            parameters_body,
            errors,
            results,
            response_header,
            extra,
        } = self;

        Operation {
            service: service.clone(),
            name: name.clone(),
            summary: summary.clone(),
            description: description.clone(),
            deprecated: *deprecated,
            method: method.clone(),
            path: path.clone(),
            parameters: parameters.clone(),
            parameters_body: parameters_body.clone(),
            errors: errors.clone(),
            results: results
                .iter()
                .map(|result| result.convert_case(rules))
                .collect(),
            response_header: response_header.clone(),
            extra: extra.clone(),
        }
    }
}

impl ConvertCase for Service {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        debug!(
            service = %self.name,
            operations = self.operations.len(),
            "converting service results"
        );

        Service {
            name: self.name.clone(),
            operations: self
                .operations
                .iter()
                .map(|operation| operation.convert_case(rules))
                .collect(),
            imports: self.imports.clone(),
            extra: self.extra.clone(),
        }
    }
}

impl ConvertCase for Client {
    fn convert_case<R>(&self, rules: &R) -> Self
    where
        R: CasingRules<str> + ?Sized,
    {
        debug!(
            models = self.models.len(),
            services = self.services.len(),
            "converting client names"
        );

        Client {
            version: self.version.clone(),
            server: self.server.clone(),
            models: self
                .models
                .iter()
                .map(|model| model.convert_case(rules))
                .collect(),
            services: self
                .services
                .iter()
                .map(|service| service.convert_case(rules))
                .collect(),
            extra: self.extra.clone(),
        }
    }
}
